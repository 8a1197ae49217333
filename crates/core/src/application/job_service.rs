// Job Service - CRUD use cases over the JobRepository port

use crate::domain::{Job, JobDraft, JobId};
use crate::error::{AppError, Result};
use crate::port::JobRepository;
use std::sync::Arc;
use tracing::{debug, info};

/// Message carried by `AppError::NotFound` for a missing job
pub const JOB_NOT_FOUND: &str = "Job not found";

/// Job Service
///
/// Holds no state of its own; every call round-trips to the repository.
pub struct JobService {
    job_repo: Arc<dyn JobRepository>,
}

impl JobService {
    pub fn new(job_repo: Arc<dyn JobRepository>) -> Self {
        Self { job_repo }
    }

    /// Create a job and return its assigned id
    pub async fn create(&self, draft: JobDraft) -> Result<JobId> {
        draft.validate()?;

        let id = self.job_repo.insert(&draft).await?;
        info!(job_id = id, name = %draft.name, "Job created");

        Ok(id)
    }

    /// Fetch a single job
    pub async fn get(&self, id: JobId) -> Result<Job> {
        self.job_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(JOB_NOT_FOUND.to_string()))
    }

    /// Fetch every job
    pub async fn list(&self) -> Result<Vec<Job>> {
        let jobs = self.job_repo.list_all().await?;
        debug!(count = jobs.len(), "Listed jobs");
        Ok(jobs)
    }

    /// Rename a job; returns rows affected (0 if the id does not exist)
    pub async fn update(&self, id: JobId, draft: JobDraft) -> Result<u64> {
        draft.validate()?;

        let rows = self.job_repo.update(id, &draft).await?;
        info!(job_id = id, rows_affected = rows, "Job updated");

        Ok(rows)
    }

    /// Delete a job; returns rows affected (0 if the id does not exist)
    pub async fn delete(&self, id: JobId) -> Result<u64> {
        let rows = self.job_repo.delete(id).await?;
        info!(job_id = id, rows_affected = rows, "Job deleted");

        Ok(rows)
    }

    /// Number of stored jobs
    pub async fn count(&self) -> Result<i64> {
        self.job_repo.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use async_trait::async_trait;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    /// In-memory stand-in for the SQL adapter
    #[derive(Default)]
    struct MemoryJobRepository {
        rows: Mutex<BTreeMap<JobId, String>>,
        next_id: Mutex<JobId>,
    }

    #[async_trait]
    impl JobRepository for MemoryJobRepository {
        async fn insert(&self, draft: &JobDraft) -> Result<JobId> {
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            self.rows
                .lock()
                .unwrap()
                .insert(*next_id, draft.name.clone());
            Ok(*next_id)
        }

        async fn find_by_id(&self, id: JobId) -> Result<Option<Job>> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .get(&id)
                .map(|name| Job::new(id, name.clone())))
        }

        async fn list_all(&self) -> Result<Vec<Job>> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .map(|(id, name)| Job::new(*id, name.clone()))
                .collect())
        }

        async fn update(&self, id: JobId, draft: &JobDraft) -> Result<u64> {
            match self.rows.lock().unwrap().get_mut(&id) {
                Some(name) => {
                    *name = draft.name.clone();
                    Ok(1)
                }
                None => Ok(0),
            }
        }

        async fn delete(&self, id: JobId) -> Result<u64> {
            Ok(self.rows.lock().unwrap().remove(&id).map_or(0, |_| 1))
        }

        async fn count(&self) -> Result<i64> {
            Ok(self.rows.lock().unwrap().len() as i64)
        }
    }

    fn service() -> JobService {
        JobService::new(Arc::new(MemoryJobRepository::default()))
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let service = service();

        let id = service.create(JobDraft::new("backup-job")).await.unwrap();
        let job = service.get(id).await.unwrap();

        assert_eq!(job, Job::new(id, "backup-job"));
    }

    #[tokio::test]
    async fn test_create_rejects_empty_name() {
        let service = service();

        let err = service.create(JobDraft::new("  ")).await.unwrap_err();
        assert!(matches!(err, AppError::Domain(DomainError::EmptyName)));
        assert_eq!(service.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let err = service().get(45).await.unwrap_err();
        match err {
            AppError::NotFound(msg) => assert_eq!(msg, JOB_NOT_FOUND),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_missing_affects_nothing() {
        let service = service();

        let rows = service.update(7, JobDraft::new("ghost")).await.unwrap();
        assert_eq!(rows, 0);
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let service = service();
        let id = service.create(JobDraft::new("cleanup")).await.unwrap();

        assert_eq!(service.delete(id).await.unwrap(), 1);
        assert_eq!(service.delete(id).await.unwrap(), 0);
        assert_eq!(service.delete(id).await.unwrap(), 0);
    }
}
