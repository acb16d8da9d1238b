//! CLI argument definitions using clap
//!
//! Commands:
//! - alunos serve [--config <path>] [--host <host>] [--port <port>]
//! - alunos openapi

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// alunos - in-memory student records over HTTP
#[derive(Parser, Debug)]
#[command(name = "alunos")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind to (overrides the config file)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides the config file)
        #[arg(long, short)]
        port: Option<u16>,
    },

    /// Print the OpenAPI document and exit
    Openapi,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
