//! # Student Store
//!
//! In-memory, insertion-ordered collection of student records.
//!
//! The store is single-owner: mutators take `&mut self` and nothing is
//! synchronized internally. Shared access goes through an outer lock
//! (see `http_server::student_routes::StudentsState`).
//!
//! Unknown ids are reported through `Option`/`bool` return values and never
//! touch the collection.

use uuid::Uuid;

use super::model::{Student, StudentInput};
use super::validation::ValidatedStudent;

/// In-memory student store
#[derive(Debug, Default)]
pub struct StudentStore {
    students: Vec<Student>,
}

impl StudentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a record with a fresh id and append it
    pub fn create(&mut self, input: ValidatedStudent) -> Student {
        let mut id = Uuid::new_v4();
        while self.contains(id) {
            id = Uuid::new_v4();
        }

        let student = Student::from_validated(id, input);
        self.students.push(student.clone());
        student
    }

    /// Find a record by id
    pub fn get_by_id(&self, id: Uuid) -> Option<Student> {
        self.students.iter().find(|s| s.id == id).cloned()
    }

    /// Replace name, email and course of an existing record
    ///
    /// The email is stored as given.
    pub fn update(&mut self, id: Uuid, input: StudentInput) -> Option<Student> {
        let existing = self.students.iter_mut().find(|s| s.id == id)?;
        existing.apply(input);
        Some(existing.clone())
    }

    /// Remove a record, returning whether it existed
    pub fn remove(&mut self, id: Uuid) -> bool {
        match self.position(id) {
            Some(index) => {
                self.students.remove(index);
                true
            }
            None => false,
        }
    }

    /// All records in creation order
    pub fn list_all(&self) -> Vec<Student> {
        self.students.clone()
    }

    /// Whether a record with this id is stored
    pub fn contains(&self, id: Uuid) -> bool {
        self.position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    fn position(&self, id: Uuid) -> Option<usize> {
        self.students.iter().position(|s| s.id == id)
    }
}
