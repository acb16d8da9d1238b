//! HTTP Server Configuration
//!
//! Host, port, CORS and the few behavior switches the records API has.
//! Every field has a default, so an empty JSON object is a valid config.

use serde::{Deserialize, Serialize};

use crate::observability::Severity;

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 3000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins; empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Serve `/api-docs` (default: true)
    #[serde(default = "default_docs_enabled")]
    pub docs_enabled: bool,

    /// Apply the create-time email check to updates too (default: false)
    #[serde(default)]
    pub validate_email_on_update: bool,

    /// Minimum log severity (default: "INFO")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_docs_enabled() -> bool {
    true
}

fn default_log_level() -> String {
    "INFO".to_string()
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            docs_enabled: default_docs_enabled(),
            validate_email_on_update: false,
            log_level: default_log_level(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parsed `log_level`
    pub fn severity(&self) -> Result<Severity, String> {
        self.log_level.parse()
    }

    /// Reject values that deserialize but cannot be served
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("host must not be empty".to_string());
        }
        if self.port == 0 {
            return Err("port must be > 0".to_string());
        }
        self.severity()?;
        Ok(())
    }
}
