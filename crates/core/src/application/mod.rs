// Application Layer - Use Cases

pub mod job_service;

// Re-exports
pub use job_service::JobService;
