//! Jobkeeper - Main Entry Point
//! HTTP/JSON CRUD service over the jobs table

mod config;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::{LogFormat, ServerConfig};
use jobkeeper_api_http::HttpServer;
use jobkeeper_core::application::JobService;
use jobkeeper_infra_sqlite::{create_pool, ensure_schema, SqliteJobRepository};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load .env (optional) so it can also carry RUST_LOG
    let dotenv_result = dotenv::dotenv();

    // 2. Load configuration
    let config = ServerConfig::from_env().context("Invalid configuration")?;

    // 3. Initialize logging
    init_logging(config.log_format)?;

    info!("Jobkeeper v{} starting...", VERSION);
    match dotenv_result {
        Ok(path) => info!(path = %path.display(), "Loaded environment file"),
        Err(e) if e.not_found() => info!("No .env file found, using process environment"),
        Err(e) => warn!(error = %e, "Failed to read .env file (continuing without it)"),
    }

    // 4. Initialize database
    if let Some(dir) = config.database_dir() {
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create database directory {}", dir.display()))?;
    }

    info!(database_url = %config.database_url, "Initializing database...");
    let pool = create_pool(&config.database_url, config.pool)
        .await
        .context("DB pool creation failed")?;
    ensure_schema(&pool)
        .await
        .context("Schema bootstrap failed")?;
    info!("Successfully connected!");

    // 5. Setup dependencies (DI wiring)
    let job_repo = Arc::new(SqliteJobRepository::new(pool.clone()));
    let service = Arc::new(JobService::new(job_repo));

    // 6. Start HTTP server
    let server = HttpServer::bind(&config.http, service)
        .await
        .with_context(|| format!("Failed to bind {}", config.http.addr()))?;

    info!("Press Ctrl+C to shutdown");
    server
        .run(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    // 7. Graceful shutdown
    pool.close().await;
    info!("Shutdown complete.");

    Ok(())
}

fn init_logging(format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("jobkeeper=info"))
        .context("Failed to create env filter")?;

    match format {
        LogFormat::Json => {
            // Production: JSON structured logging
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .try_init()
                .context("Failed to install tracing subscriber")?;
        }
        LogFormat::Pretty => {
            // Development: Pretty formatting with colors
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty())
                .try_init()
                .context("Failed to install tracing subscriber")?;
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received. Exiting gracefully..."),
        Err(e) => warn!(error = %e, "Failed to listen for Ctrl+C; shutting down"),
    }
}
