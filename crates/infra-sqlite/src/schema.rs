// Schema Bootstrap

use crate::error::map_sqlx_error;
use jobkeeper_core::error::Result;
use sqlx::SqlitePool;
use tracing::info;

const JOBS_SCHEMA: &str = include_str!("../schema/jobs.sql");

/// Create the jobs table if it does not exist yet. Safe to run on every start.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<()> {
    info!("Ensuring database schema...");

    let mut tx = pool.begin().await.map_err(map_sqlx_error)?;

    // Split by semicolon and execute each statement
    for statement in JOBS_SCHEMA.split(';') {
        // Remove comments and trim
        let clean_statement: String = statement
            .lines()
            .filter(|line| !line.trim().starts_with("--"))
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string();

        if !clean_statement.is_empty() {
            sqlx::query(&clean_statement)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx_error)?;
        }
    }

    tx.commit().await.map_err(map_sqlx_error)?;

    info!("Database schema ready");
    Ok(())
}
