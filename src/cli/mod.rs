//! CLI module
//!
//! Provides command-line interface for:
//! - serve: Start the HTTP server
//! - openapi: Print the API description

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{load_config, openapi, resolve_config, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
