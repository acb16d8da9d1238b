//! # HTTP Server Module
//!
//! The HTTP façade in front of the student store.
//!
//! # Endpoints
//!
//! - `/students`, `/students/:id` - CRUD over student records
//! - `/api-docs` - Swagger UI and OpenAPI document
//! - `/health` - Health check
//! - `/observability/*` - Health and counters

pub mod config;
pub mod docs_routes;
pub mod observability_routes;
pub mod server;
pub mod student_routes;

pub use config::HttpServerConfig;
pub use docs_routes::openapi_document;
pub use server::HttpServer;
pub use student_routes::StudentsState;
