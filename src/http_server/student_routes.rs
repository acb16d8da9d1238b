//! Student HTTP Routes
//!
//! CRUD endpoints over the in-memory student store.
//!
//! - `POST   /students`      create (email validated first)
//! - `GET    /students`      list in creation order
//! - `GET    /students/:id`  fetch one
//! - `PUT    /students/:id`  replace name, email and course
//! - `DELETE /students/:id`  remove

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::observability::{log_event, log_event_with_fields, Event, MetricsRegistry};
use crate::students::{Student, StudentError, StudentInput, StudentResult, StudentStore};

// ==================
// Shared State
// ==================

/// Student state shared across handlers
///
/// The store synchronizes nothing itself; this lock is the only path to it.
pub struct StudentsState {
    store: RwLock<StudentStore>,
    metrics: Arc<MetricsRegistry>,
    validate_email_on_update: bool,
}

impl StudentsState {
    pub fn new() -> Self {
        Self::with_store(StudentStore::new(), Arc::new(MetricsRegistry::new()))
    }

    /// Wrap an existing store
    pub fn with_store(store: StudentStore, metrics: Arc<MetricsRegistry>) -> Self {
        metrics.set_students(store.len());
        Self {
            store: RwLock::new(store),
            metrics,
            validate_email_on_update: false,
        }
    }

    /// Re-check the email on `PUT` as well
    pub fn validate_email_on_update(mut self, enabled: bool) -> Self {
        self.validate_email_on_update = enabled;
        self
    }

    pub fn metrics(&self) -> &Arc<MetricsRegistry> {
        &self.metrics
    }

    // ==================
    // Operations
    // ==================

    /// Validate and create; the store is untouched when validation fails
    pub fn create(&self, input: StudentInput) -> StudentResult<Student> {
        let validated = match input.validate() {
            Ok(validated) => validated,
            Err(e) => return Err(self.rejected(e)),
        };

        let mut store = self.write_store()?;
        let student = store.create(validated);
        self.metrics.increment_created();
        self.metrics.set_students(store.len());
        drop(store);

        let id = student.id.to_string();
        log_event_with_fields(Event::StudentCreated, &[("id", &id)]);
        Ok(student)
    }

    pub fn list(&self) -> StudentResult<Vec<Student>> {
        Ok(self.read_store()?.list_all())
    }

    pub fn get(&self, raw_id: &str) -> StudentResult<Student> {
        let found = match parse_id(raw_id) {
            Some(id) => self.read_store()?.get_by_id(id),
            None => None,
        };
        found.ok_or_else(|| self.not_found(raw_id, StudentError::NotFound))
    }

    /// Replace every field but the id
    ///
    /// The email is not checked here unless `validate_email_on_update` is set,
    /// mirroring the public API's historical behavior.
    pub fn update(&self, raw_id: &str, input: StudentInput) -> StudentResult<Student> {
        self.update_from_body(raw_id, Ok(input))
    }

    /// Update from a request body that may have failed to parse
    ///
    /// An unknown id answers not-found whatever the body holds; body and
    /// email errors are only reported for a stored record.
    pub fn update_from_body(
        &self,
        raw_id: &str,
        body: StudentResult<StudentInput>,
    ) -> StudentResult<Student> {
        let Some(id) = parse_id(raw_id) else {
            return Err(self.not_found(raw_id, StudentError::NotFoundForUpdate));
        };

        let mut store = self.write_store()?;
        if !store.contains(id) {
            drop(store);
            return Err(self.not_found(raw_id, StudentError::NotFoundForUpdate));
        }

        let input = match body.and_then(|input| self.update_input(input)) {
            Ok(input) => input,
            Err(e) => {
                drop(store);
                return Err(self.rejected(e));
            }
        };

        let updated = store.update(id, input);
        drop(store);

        match updated {
            Some(student) => {
                self.metrics.increment_updated();
                log_event_with_fields(Event::StudentUpdated, &[("id", raw_id)]);
                Ok(student)
            }
            None => Err(self.not_found(raw_id, StudentError::NotFoundForUpdate)),
        }
    }

    pub fn remove(&self, raw_id: &str) -> StudentResult<()> {
        let removed = match parse_id(raw_id) {
            Some(id) => {
                let mut store = self.write_store()?;
                let removed = store.remove(id);
                self.metrics.set_students(store.len());
                removed
            }
            None => false,
        };

        if !removed {
            return Err(self.not_found(raw_id, StudentError::NotFoundForDelete));
        }

        self.metrics.increment_removed();
        log_event_with_fields(Event::StudentRemoved, &[("id", raw_id)]);
        Ok(())
    }

    // ==================
    // Helpers
    // ==================

    fn read_store(&self) -> StudentResult<RwLockReadGuard<'_, StudentStore>> {
        self.store.read().map_err(|_| store_unavailable())
    }

    fn write_store(&self) -> StudentResult<RwLockWriteGuard<'_, StudentStore>> {
        self.store.write().map_err(|_| store_unavailable())
    }

    fn update_input(&self, input: StudentInput) -> StudentResult<StudentInput> {
        if self.validate_email_on_update {
            input.validate().map(|validated| validated.into_inner())
        } else {
            Ok(input)
        }
    }

    fn rejected(&self, err: StudentError) -> StudentError {
        self.metrics.increment_validation_rejected();
        let reason = err.to_string();
        log_event_with_fields(Event::ValidationRejected, &[("reason", &reason)]);
        err
    }

    fn not_found(&self, raw_id: &str, err: StudentError) -> StudentError {
        self.metrics.increment_not_found();
        log_event_with_fields(Event::StudentNotFound, &[("id", raw_id)]);
        err
    }
}

impl Default for StudentsState {
    fn default() -> Self {
        Self::new()
    }
}

/// Only the lowercase hyphenated form the API hands out names a record
fn parse_id(raw_id: &str) -> Option<Uuid> {
    Uuid::parse_str(raw_id)
        .ok()
        .filter(|id| id.hyphenated().to_string() == raw_id)
}

fn store_unavailable() -> StudentError {
    log_event(Event::StoreUnavailable);
    StudentError::StorageError("Lock poisoned".to_string())
}

// ==================
// Student Routes
// ==================

/// Create student routes
pub fn student_routes(state: Arc<StudentsState>) -> Router {
    Router::new()
        .route("/students", get(list_handler).post(create_handler))
        .route(
            "/students/:id",
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .with_state(state)
}

// ==================
// Handlers
// ==================

fn body_input(
    payload: Result<Json<StudentInput>, JsonRejection>,
) -> StudentResult<StudentInput> {
    payload
        .map(|Json(input)| input)
        .map_err(|e| StudentError::InvalidBody(e.body_text()))
}

async fn create_handler(
    State(state): State<Arc<StudentsState>>,
    payload: Result<Json<StudentInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Student>), StudentError> {
    let input = body_input(payload).map_err(|e| state.rejected(e))?;
    let student = state.create(input)?;
    Ok((StatusCode::CREATED, Json(student)))
}

async fn list_handler(
    State(state): State<Arc<StudentsState>>,
) -> Result<Json<Vec<Student>>, StudentError> {
    Ok(Json(state.list()?))
}

async fn get_handler(
    State(state): State<Arc<StudentsState>>,
    Path(id): Path<String>,
) -> Result<Json<Student>, StudentError> {
    Ok(Json(state.get(&id)?))
}

async fn update_handler(
    State(state): State<Arc<StudentsState>>,
    Path(id): Path<String>,
    payload: Result<Json<StudentInput>, JsonRejection>,
) -> Result<Json<Student>, StudentError> {
    Ok(Json(state.update_from_body(&id, body_input(payload))?))
}

async fn delete_handler(
    State(state): State<Arc<StudentsState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, StudentError> {
    state.remove(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn antonio() -> StudentInput {
        StudentInput::new(
            "Antonio Henrique",
            "antonio.henrique@example.com",
            "Ciencia da computacao",
        )
    }

    #[test]
    fn test_create_rejects_invalid_email() {
        let state = StudentsState::new();
        let result = state.create(StudentInput::new("Ana", "not-an-email", "Fisica"));

        assert_eq!(result, Err(StudentError::InvalidEmail));
        assert!(state.list().unwrap().is_empty());
        assert_eq!(state.metrics().snapshot().validation_rejected, 1);
    }

    #[test]
    fn test_crud_through_state() {
        let state = StudentsState::new();
        let created = state.create(antonio()).unwrap();
        let id = created.id.to_string();

        assert_eq!(state.get(&id).unwrap(), created);

        let updated = state
            .update(&id, StudentInput::new("Antonio", "antonio@example.com", "Fisica"))
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.course_name, "Fisica");

        state.remove(&id).unwrap();
        assert_eq!(state.get(&id), Err(StudentError::NotFound));

        let snapshot = state.metrics().snapshot();
        assert_eq!(snapshot.created, 1);
        assert_eq!(snapshot.updated, 1);
        assert_eq!(snapshot.removed, 1);
        assert_eq!(snapshot.not_found, 1);
        assert_eq!(snapshot.students, 0);
    }

    #[test]
    fn test_non_uuid_id_is_not_found() {
        let state = StudentsState::new();
        assert_eq!(state.get("1"), Err(StudentError::NotFound));
        assert_eq!(
            state.update("1", antonio()),
            Err(StudentError::NotFoundForUpdate)
        );
        assert_eq!(state.remove("1"), Err(StudentError::NotFoundForDelete));
    }

    #[test]
    fn test_update_email_check_is_opt_in() {
        let lenient = StudentsState::new();
        let created = lenient.create(antonio()).unwrap();
        let id = created.id.to_string();
        let bad_email = StudentInput::new("Antonio", "sem-email", "Fisica");
        assert_eq!(lenient.update(&id, bad_email.clone()).unwrap().email, "sem-email");

        let strict = StudentsState::new().validate_email_on_update(true);
        let created = strict.create(antonio()).unwrap();
        let id = created.id.to_string();
        assert_eq!(strict.update(&id, bad_email.clone()), Err(StudentError::InvalidEmail));
        assert_eq!(strict.get(&id).unwrap(), created);

        let unknown = Uuid::new_v4().to_string();
        assert_eq!(
            strict.update(&unknown, bad_email),
            Err(StudentError::NotFoundForUpdate)
        );
    }

    #[test]
    fn test_only_canonical_id_form_matches() {
        let state = StudentsState::new();
        let created = state.create(antonio()).unwrap();
        let id = created.id;

        let aliases = [
            id.hyphenated().to_string().to_uppercase(),
            id.simple().to_string(),
            id.braced().to_string(),
            id.urn().to_string(),
        ];
        for alias in &aliases {
            assert_eq!(state.get(alias), Err(StudentError::NotFound));
            assert_eq!(
                state.update(alias, antonio()),
                Err(StudentError::NotFoundForUpdate)
            );
            assert_eq!(state.remove(alias), Err(StudentError::NotFoundForDelete));
        }

        assert_eq!(state.get(&id.to_string()).unwrap(), created);
        assert_eq!(state.list().unwrap().len(), 1);
    }

    #[test]
    fn test_unknown_id_wins_over_bad_body() {
        let state = StudentsState::new();
        let created = state.create(antonio()).unwrap();
        let bad_body = || Err(StudentError::InvalidBody("missing field `email`".to_string()));

        let unknown = Uuid::new_v4().to_string();
        assert_eq!(
            state.update_from_body(&unknown, bad_body()),
            Err(StudentError::NotFoundForUpdate)
        );
        assert_eq!(
            state.update_from_body("1", bad_body()),
            Err(StudentError::NotFoundForUpdate)
        );

        // A stored record still reports the body error and is left as is
        let id = created.id.to_string();
        assert!(matches!(
            state.update_from_body(&id, bad_body()),
            Err(StudentError::InvalidBody(_))
        ));
        assert_eq!(state.get(&id).unwrap(), created);

        let snapshot = state.metrics().snapshot();
        assert_eq!(snapshot.not_found, 2);
        assert_eq!(snapshot.validation_rejected, 1);
        assert_eq!(snapshot.updated, 0);
    }

    #[test]
    fn test_concurrent_creates_and_removes() {
        const THREADS: usize = 8;
        const PER_THREAD: usize = 250;

        let state = StudentsState::new();

        std::thread::scope(|scope| {
            for t in 0..THREADS {
                let state = &state;
                scope.spawn(move || {
                    for n in 0..PER_THREAD {
                        let student = state
                            .create(StudentInput::new(
                                format!("Aluno {}-{}", t, n),
                                "aluno@example.com",
                                "Fisica",
                            ))
                            .unwrap();
                        if n % 2 == 1 {
                            state.remove(&student.id.to_string()).unwrap();
                        }
                    }
                });
            }
        });

        let kept = THREADS * PER_THREAD / 2;
        let listed = state.list().unwrap();
        assert_eq!(listed.len(), kept);

        let ids: std::collections::HashSet<Uuid> = listed.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), kept);

        let snapshot = state.metrics().snapshot();
        assert_eq!(snapshot.students, kept as u64);
        assert_eq!(snapshot.created, (THREADS * PER_THREAD) as u64);
        assert_eq!(snapshot.removed, kept as u64);
    }
}
