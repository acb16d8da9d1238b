//! # Student Errors
//!
//! Error kinds surfaced by the records API. Messages are the ones clients
//! see in the `error` field of the response body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for student operations
pub type StudentResult<T> = Result<T, StudentError>;

/// Student API errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StudentError {
    // ==================
    // Validation Errors
    // ==================
    /// Email does not have the `local@domain.tld` shape
    #[error("E-mail inválido")]
    InvalidEmail,

    /// Body is not JSON or is missing a field
    #[error("Corpo da requisição inválido: {0}")]
    InvalidBody(String),

    // ==================
    // Not Found Errors
    // ==================
    #[error("Aluno não encontrado")]
    NotFound,

    #[error("Aluno não encontrado para atualização")]
    NotFoundForUpdate,

    #[error("Aluno não encontrado para exclusão")]
    NotFoundForDelete,

    // ==================
    // Internal Errors
    // ==================
    /// Store lock poisoned by a panicking writer
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl StudentError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            StudentError::InvalidEmail => StatusCode::BAD_REQUEST,
            StudentError::InvalidBody(_) => StatusCode::BAD_REQUEST,

            StudentError::NotFound => StatusCode::NOT_FOUND,
            StudentError::NotFoundForUpdate => StatusCode::NOT_FOUND,
            StudentError::NotFoundForDelete => StatusCode::NOT_FOUND,

            StudentError::StorageError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<StudentError> for ErrorResponse {
    fn from(err: StudentError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for StudentError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
