//! Route Table
//!
//! Built once at startup; the only shared state is the job service.

use crate::handler::{
    create_job, delete_job, get_job, health, list_jobs, route_not_found, update_job,
};
use axum::routing::get;
use axum::Router;
use jobkeeper_core::application::JobService;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Handler state (cheap to clone per request)
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<JobService>,
}

impl AppState {
    pub fn new(service: Arc<JobService>) -> Self {
        Self { service }
    }
}

/// Build the API router with a permissive CORS policy on every route
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/job", get(list_jobs).post(create_job))
        .route(
            "/api/job/{id}",
            get(get_job).put(update_job).delete(delete_job),
        )
        .route("/health", get(health))
        .fallback(route_not_found)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
