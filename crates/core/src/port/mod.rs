// Port Layer - Interfaces for external dependencies

pub mod job_repository;

// Re-exports
pub use job_repository::JobRepository;
