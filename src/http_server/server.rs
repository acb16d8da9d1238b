//! # HTTP Server
//!
//! Combines the student, documentation and observability routers behind
//! one CORS layer and serves them with graceful shutdown on Ctrl-C.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::config::HttpServerConfig;
use super::docs_routes::docs_routes;
use super::observability_routes::{health_routes, observability_routes};
use super::student_routes::{student_routes, StudentsState};
use crate::observability::{log_event, log_event_with_fields, Event};

/// HTTP server for the student records API
pub struct HttpServer {
    config: HttpServerConfig,
    state: Arc<StudentsState>,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server with an empty store
    pub fn with_config(config: HttpServerConfig) -> Self {
        let state = StudentsState::new().validate_email_on_update(config.validate_email_on_update);
        Self::with_state(config, Arc::new(state))
    }

    /// Create a server around an existing state
    pub fn with_state(config: HttpServerConfig, state: Arc<StudentsState>) -> Self {
        let router = Self::build_router(&config, state.clone());
        Self {
            config,
            state,
            router,
        }
    }

    fn build_router(config: &HttpServerConfig, state: Arc<StudentsState>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        let metrics = state.metrics().clone();
        let mut router = Router::new()
            .merge(health_routes())
            .merge(student_routes(state))
            .nest("/observability", observability_routes(metrics));

        if config.docs_enabled {
            router = router.merge(docs_routes());
        }

        router.layer(cors)
    }

    pub fn config(&self) -> &HttpServerConfig {
        &self.config
    }

    pub fn state(&self) -> &Arc<StudentsState> {
        &self.state
    }

    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until Ctrl-C
    pub async fn start(self) -> io::Result<()> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid socket address '{}': {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        let bound = listener.local_addr()?.to_string();
        let docs = if self.config.docs_enabled {
            format!("http://{}/api-docs", bound)
        } else {
            "disabled".to_string()
        };
        log_event_with_fields(Event::ServerListening, &[("addr", &bound), ("docs", &docs)]);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        log_event(Event::ShutdownComplete);
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

async fn shutdown_signal() {
    // A failed handler install means we just run until killed
    if tokio::signal::ctrl_c().await.is_ok() {
        log_event(Event::ShutdownStart);
    } else {
        std::future::pending::<()>().await;
    }
}
