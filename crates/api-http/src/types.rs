//! HTTP Request/Response Types
//!
//! Request bodies decode straight into `jobkeeper_core::domain::JobDraft`;
//! job reads serialize `Job` as-is.

use jobkeeper_core::domain::JobId;
use serde::Serialize;

/// Acknowledgement for create, update and delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    pub id: JobId,
    pub message: String,
}

impl MessageResponse {
    pub fn created(id: JobId) -> Self {
        Self {
            id,
            message: "Job created successfully".to_string(),
        }
    }

    pub fn updated(id: JobId, rows_affected: u64) -> Self {
        Self {
            id,
            message: format!(
                "Job updated successfully. Total rows/record affected {}",
                rows_affected
            ),
        }
    }

    pub fn deleted(id: JobId, rows_affected: u64) -> Self {
        Self {
            id,
            message: format!(
                "Job deleted successfully. Total rows/record affected {}",
                rows_affected
            ),
        }
    }
}

/// Body of every error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// GET /health
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub jobs: i64,
}
