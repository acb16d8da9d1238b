//! # Student Model
//!
//! Wire names follow the public API: `nome`, `email`, `nome_curso`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::ValidatedStudent;

/// A stored student record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Generated by the store, never changes
    pub id: Uuid,

    /// Student's full name
    #[serde(rename = "nome")]
    pub name: String,

    /// Contact email
    pub email: String,

    /// Course the student is enrolled in
    #[serde(rename = "nome_curso")]
    pub course_name: String,
}

impl Student {
    /// Build a record from validated input under the given id
    pub(crate) fn from_validated(id: Uuid, input: ValidatedStudent) -> Self {
        let StudentInput {
            name,
            email,
            course_name,
        } = input.into_inner();

        Self {
            id,
            name,
            email,
            course_name,
        }
    }

    /// Replace every field except `id`
    pub(crate) fn apply(&mut self, input: StudentInput) {
        self.name = input.name;
        self.email = input.email;
        self.course_name = input.course_name;
    }
}

/// Create/update request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentInput {
    #[serde(rename = "nome")]
    pub name: String,

    pub email: String,

    #[serde(rename = "nome_curso")]
    pub course_name: String,
}

impl StudentInput {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        course_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            course_name: course_name.into(),
        }
    }
}
