//! # Student Records
//!
//! The identity-keyed record store and everything it accepts or returns.
//!
//! - `model`: the student record and the raw input shape
//! - `validation`: email check producing [`ValidatedStudent`]
//! - `store`: the in-memory collection and its CRUD contract
//! - `errors`: error kinds and their HTTP status mapping
//!
//! The store performs no validation and no locking. Callers validate input
//! before `create` and wrap the store in a lock when sharing it.

pub mod errors;
pub mod model;
pub mod store;
pub mod validation;

pub use errors::{ErrorResponse, StudentError, StudentResult};
pub use model::{Student, StudentInput};
pub use store::StudentStore;
pub use validation::{is_valid_email, ValidatedStudent};
