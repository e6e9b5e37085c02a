//! HTTP server exposing the sorting strategies.
//!
//! Routes:
//! - `/process-single` runs the sequential strategy
//! - `/process-concurrent` runs the concurrent strategy
//! - `/health` answers liveness probes

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{any, get};
use axum::Router;
use tower_http::trace::TraceLayer;

use batchsort_core::{Result, SortStrategy, StrategyKind};

use crate::handlers::{health, process_concurrent, process_single};

/// Default listen address.
pub const DEFAULT_ADDR: &str = "0.0.0.0:8000";

fn default_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8000))
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address.
    pub addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
        }
    }
}

impl ServerConfig {
    /// Creates a new server config builder.
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }
}

/// Builder for ServerConfig.
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    addr: Option<SocketAddr>,
}

impl ServerConfigBuilder {
    /// Sets the listen address.
    pub fn addr(mut self, addr: SocketAddr) -> Self {
        self.addr = Some(addr);
        self
    }

    /// Builds the server config.
    pub fn build(self) -> ServerConfig {
        ServerConfig {
            addr: self.addr.unwrap_or_else(default_addr),
        }
    }
}

/// Shared application state.
///
/// Built once at startup and never mutated.
pub struct AppState {
    /// Strategy behind `/process-single`.
    pub single: Arc<dyn SortStrategy>,
    /// Strategy behind `/process-concurrent`.
    pub concurrent: Arc<dyn SortStrategy>,
}

impl AppState {
    /// Creates state wired to the built-in strategies.
    pub fn new() -> Self {
        Self::with_strategies(
            StrategyKind::Sequential.build(),
            StrategyKind::Concurrent.build(),
        )
    }

    /// Creates state with explicit strategies for each route.
    pub fn with_strategies(
        single: Arc<dyn SortStrategy>,
        concurrent: Arc<dyn SortStrategy>,
    ) -> Self {
        Self { single, concurrent }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// The HTTP server.
pub struct Server {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl Server {
    /// Creates a new server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        Self::with_state(config, AppState::new())
    }

    /// Creates a new server with custom state.
    pub fn with_state(config: ServerConfig, state: AppState) -> Self {
        Self {
            config,
            state: Arc::new(state),
        }
    }

    /// Returns the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Creates the router.
    ///
    /// Methods are not checked on the processing routes, and request
    /// bodies are not size limited.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(health))
            .route("/process-single", any(process_single))
            .route("/process-concurrent", any(process_concurrent))
            .with_state(self.state.clone())
            .layer(DefaultBodyLimit::disable())
            .layer(TraceLayer::new_for_http())
    }

    /// Runs the server until Ctrl+C or SIGTERM.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot be bound or serving fails.
    pub async fn run(self) -> Result<()> {
        let router = self.router();

        tracing::info!(addr = %self.config.addr, "Starting batchsort server");
        eprintln!("Server listening on http://{}", self.config.addr);

        let listener = tokio::net::TcpListener::bind(self.config.addr).await?;

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| batchsort_core::Error::internal(e.to_string()))?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;

    #[test]
    fn test_server_config_builder() {
        let config = ServerConfig::builder()
            .addr("127.0.0.1:3000".parse().unwrap())
            .build();
        assert_eq!(config.addr, "127.0.0.1:3000".parse().unwrap());
    }

    #[test]
    fn test_default_port_is_fixed() {
        let config = ServerConfig::builder().build();
        assert_eq!(config.addr, DEFAULT_ADDR.parse().unwrap());
        assert_eq!(ServerConfig::default().addr.port(), 8000);
    }

    #[tokio::test]
    async fn test_health() {
        let app = Server::new(ServerConfig::default()).router();

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let app = Server::new(ServerConfig::default()).router();

        let response = app
            .oneshot(Request::builder().uri("/process").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
