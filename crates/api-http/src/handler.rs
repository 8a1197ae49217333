//! HTTP Handlers
//!
//! One handler per (method, resource). Each parses its input, calls the
//! `JobService` and writes exactly one JSON body.

use crate::error::ApiError;
use crate::router::AppState;
use crate::types::{ErrorBody, HealthResponse, MessageResponse};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use jobkeeper_core::domain::{parse_job_id, Job, JobDraft};

/// POST /api/job
pub async fn create_job(
    State(state): State<AppState>,
    payload: Result<Json<JobDraft>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(draft) = payload?;

    let id = state.service.create(draft).await?;

    Ok((StatusCode::CREATED, Json(MessageResponse::created(id))))
}

/// GET /api/job/{id}
pub async fn get_job(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Job>, ApiError> {
    let Path(raw_id) = path?;
    let id = parse_job_id(&raw_id)?;

    let job = state.service.get(id).await?;

    Ok(Json(job))
}

/// GET /api/job
pub async fn list_jobs(State(state): State<AppState>) -> Result<Json<Vec<Job>>, ApiError> {
    let jobs = state.service.list().await?;
    Ok(Json(jobs))
}

/// PUT /api/job/{id}
pub async fn update_job(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<JobDraft>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(raw_id) = path?;
    let id = parse_job_id(&raw_id)?;
    let Json(draft) = payload?;

    let rows = state.service.update(id, draft).await?;

    Ok(Json(MessageResponse::updated(id, rows)))
}

/// DELETE /api/job/{id}
pub async fn delete_job(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(raw_id) = path?;
    let id = parse_job_id(&raw_id)?;

    let rows = state.service.delete(id).await?;

    Ok(Json(MessageResponse::deleted(id, rows)))
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let jobs = state.service.count().await?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        service: "jobkeeper".to_string(),
        version: jobkeeper_core::VERSION.to_string(),
        jobs,
    }))
}

/// Any unmatched path
pub async fn route_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "Route not found".to_string(),
        }),
    )
}
