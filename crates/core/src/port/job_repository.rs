// Job Repository Port (Interface)

use crate::domain::{Job, JobDraft, JobId};
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for Job persistence.
///
/// Each method runs exactly one statement. A missing row is never an error:
/// lookups return `None`, writes report zero rows affected.
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Insert a new job, returning the storage-assigned id
    async fn insert(&self, draft: &JobDraft) -> Result<JobId>;

    /// Find job by ID
    async fn find_by_id(&self, id: JobId) -> Result<Option<Job>>;

    /// All jobs, ascending by id
    async fn list_all(&self) -> Result<Vec<Job>>;

    /// Rename a job; returns rows affected
    async fn update(&self, id: JobId, draft: &JobDraft) -> Result<u64>;

    /// Remove a job; returns rows affected
    async fn delete(&self, id: JobId) -> Result<u64>;

    /// Total number of stored jobs
    async fn count(&self) -> Result<i64>;
}
