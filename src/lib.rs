//! alunos - in-memory student records over HTTP
//!
//! The record store lives in [`students`]; [`http_server`] puts an axum
//! façade and API docs in front of it; [`cli`] boots the server.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod students;
