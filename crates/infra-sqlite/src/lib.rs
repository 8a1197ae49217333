// Jobkeeper Infrastructure - SQLite Adapter
// Implements: JobRepository

mod connection;
mod error;
mod job_repository;
mod schema;

pub use connection::{create_pool, PoolSettings};
pub use job_repository::SqliteJobRepository;
pub use schema::ensure_schema;

// Note: sqlx::Error conversion goes through error::map_sqlx_error
// due to Rust's orphan rules (cannot implement From<sqlx::Error> for AppError here)
