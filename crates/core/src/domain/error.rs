// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Job name must not be empty")]
    EmptyName,

    #[error("Invalid job id: {0}")]
    InvalidJobId(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
