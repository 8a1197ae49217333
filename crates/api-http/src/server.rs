//! HTTP Server
//!
//! Binds a TCP listener and serves the API router until the shutdown
//! future resolves. In-flight requests finish before `run` returns.

use crate::router::{build_router, AppState};
use jobkeeper_core::application::JobService;
use jobkeeper_core::error::Result;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

const DEFAULT_HTTP_HOST: &str = "0.0.0.0";
const DEFAULT_HTTP_PORT: u16 = 8080;

/// HTTP Server Configuration
#[derive(Debug, Clone)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HTTP_HOST.to_string(),
            port: DEFAULT_HTTP_PORT,
        }
    }
}

impl HttpServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// HTTP Server bound to its listener
pub struct HttpServer {
    listener: TcpListener,
    state: AppState,
}

impl HttpServer {
    /// Bind the listener. Port 0 picks a free port (see `local_addr`).
    pub async fn bind(config: &HttpServerConfig, service: Arc<JobService>) -> Result<Self> {
        let listener = TcpListener::bind(config.addr()).await?;

        info!(
            host = %config.host,
            port = %config.port,
            "HTTP listener bound"
        );

        Ok(Self {
            listener,
            state: AppState::new(service),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Serve requests until `shutdown` completes
    pub async fn run<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.local_addr()?;
        let app = build_router(self.state);

        info!(%addr, "Serving HTTP API on http://{}", addr);

        axum::serve(self.listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("HTTP server stopped");
        Ok(())
    }
}
