//! CLI command implementations
//!
//! `serve` boots in a fixed order: log startup, load and validate config,
//! apply CLI overrides, build the server, then hand control to the tokio
//! runtime until shutdown.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::http_server::{openapi_document, HttpServer, HttpServerConfig};
use crate::observability::{log_event, log_event_with_fields, Event, Logger};

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, host, port } => serve(config.as_deref(), host, port),
        Command::Openapi => openapi(&mut io::stdout()),
    }
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> CliResult<HttpServerConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        CliError::config_error(format!("Failed to read config '{}': {}", path.display(), e))
    })?;

    let config: HttpServerConfig = serde_json::from_str(&content)
        .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

    config.validate().map_err(CliError::config_error)?;
    Ok(config)
}

/// Config file (or defaults) with CLI flags applied on top
pub fn resolve_config(
    path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
) -> CliResult<HttpServerConfig> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => HttpServerConfig::default(),
    };

    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    config.validate().map_err(CliError::config_error)?;
    Ok(config)
}

/// Start the HTTP server and block until it stops
pub fn serve(config_path: Option<&Path>, host: Option<String>, port: Option<u16>) -> CliResult<()> {
    log_event(Event::BootStart);

    let config = resolve_config(config_path, host, port)?;
    let severity = config.severity().map_err(CliError::config_error)?;
    Logger::set_min_severity(severity);

    let port_str = config.port.to_string();
    log_event_with_fields(
        Event::ConfigLoaded,
        &[("host", &config.host), ("port", &port_str), ("log_level", severity.as_str())],
    );

    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(server.start()).map_err(|e| {
        let reason = e.to_string();
        log_event_with_fields(Event::ServerFailed, &[("reason", &reason)]);
        CliError::serve_failed(format!("HTTP server failed: {}", e))
    })
}

/// Write the OpenAPI document as pretty JSON
pub fn openapi<W: Write>(out: &mut W) -> CliResult<()> {
    let doc = serde_json::to_string_pretty(&openapi_document())?;
    writeln!(out, "{}", doc)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("alunos.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_config_with_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, r#"{"port": 8081, "validate_email_on_update": true}"#);

        let config = load_config(&path).unwrap();
        assert_eq!(config.port, 8081);
        assert_eq!(config.host, "0.0.0.0");
        assert!(config.validate_email_on_update);
    }

    #[test]
    fn test_load_config_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = load_config(&tmp.path().join("missing.json")).unwrap_err();
        assert_eq!(err.code_str(), "ALUNOS_CLI_CONFIG_ERROR");
    }

    #[test]
    fn test_load_config_invalid_json() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "{ not json");
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn test_load_config_rejects_zero_port() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, r#"{"port": 0}"#);
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn test_cli_flags_override_file() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, r#"{"host": "127.0.0.1", "port": 8081}"#);

        let config = resolve_config(Some(&path), None, Some(9000)).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);

        let defaults = resolve_config(None, Some("localhost".to_string()), None).unwrap();
        assert_eq!(defaults.socket_addr(), "localhost:3000");
    }

    #[test]
    fn test_openapi_output() {
        let mut out = Vec::new();
        openapi(&mut out).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed["info"]["title"], "API Alunos");
    }
}
