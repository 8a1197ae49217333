// SQLite JobRepository Implementation

use crate::error::map_sqlx_error;
use async_trait::async_trait;
use jobkeeper_core::domain::{Job, JobDraft, JobId};
use jobkeeper_core::error::Result;
use jobkeeper_core::port::JobRepository;
use sqlx::SqlitePool;
use tracing::debug;

/// Data access for the `jobs` table.
///
/// Every call borrows one pooled connection for a single statement; the
/// connection goes back to the pool when the query future completes, on
/// success and on error alike.
#[derive(Clone)]
pub struct SqliteJobRepository {
    pool: SqlitePool,
}

impl SqliteJobRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobRepository for SqliteJobRepository {
    async fn insert(&self, draft: &JobDraft) -> Result<JobId> {
        let id: JobId = sqlx::query_scalar("INSERT INTO jobs (name) VALUES (?) RETURNING id")
            .bind(&draft.name)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        debug!(job_id = id, "Inserted a single record");
        Ok(id)
    }

    async fn find_by_id(&self, id: JobId) -> Result<Option<Job>> {
        let row = sqlx::query_as::<_, JobRow>("SELECT id, name FROM jobs WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if row.is_none() {
            debug!(job_id = id, "No rows were returned");
        }

        Ok(row.map(|r| r.into_job()))
    }

    async fn list_all(&self) -> Result<Vec<Job>> {
        let rows: Vec<JobRow> = sqlx::query_as("SELECT id, name FROM jobs ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(|row| row.into_job()).collect())
    }

    async fn update(&self, id: JobId, draft: &JobDraft) -> Result<u64> {
        let result = sqlx::query("UPDATE jobs SET name = ? WHERE id = ?")
            .bind(&draft.name)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        debug!(job_id = id, rows_affected = result.rows_affected(), "Update executed");
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: JobId) -> Result<u64> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        debug!(job_id = id, rows_affected = result.rows_affected(), "Delete executed");
        Ok(result.rows_affected())
    }

    async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM jobs")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(count)
    }
}

/// SQLite row representation
#[derive(Debug, sqlx::FromRow)]
struct JobRow {
    id: i64,
    name: String,
}

impl JobRow {
    fn into_job(self) -> Job {
        Job {
            id: self.id,
            name: self.name,
        }
    }
}
