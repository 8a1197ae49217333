// Job Domain Model

use crate::domain::error::{DomainError, Result};
use serde::{Deserialize, Serialize};

/// Job ID (assigned by storage on insert)
pub type JobId = i64;

/// Job Entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Job {
    pub id: JobId,
    pub name: String,
}

impl Job {
    pub fn new(id: JobId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Client-supplied job fields, used by both create and update.
///
/// `name` has no serde default: a body without it fails to decode.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JobDraft {
    pub name: String,
}

impl JobDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Enforce the non-empty name invariant
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::EmptyName);
        }
        Ok(())
    }
}

/// Parse a job id from a path segment
pub fn parse_job_id(raw: &str) -> Result<JobId> {
    raw.parse::<JobId>().map_err(|_| DomainError::InvalidJobId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_rejects_blank_name() {
        assert_eq!(JobDraft::new("").validate(), Err(DomainError::EmptyName));
        assert_eq!(JobDraft::new("   ").validate(), Err(DomainError::EmptyName));
        assert!(JobDraft::new("backup-job").validate().is_ok());
    }

    #[test]
    fn test_draft_requires_name_field() {
        let missing = serde_json::from_str::<JobDraft>(r#"{}"#);
        assert!(missing.is_err());

        let extra: JobDraft =
            serde_json::from_str(r#"{"name": "nightly", "location": "eu"}"#).unwrap();
        assert_eq!(extra.name, "nightly");
    }

    #[test]
    fn test_parse_job_id() {
        assert_eq!(parse_job_id("42"), Ok(42));
        assert_eq!(
            parse_job_id("abc"),
            Err(DomainError::InvalidJobId("abc".to_string()))
        );
        assert!(parse_job_id("4.2").is_err());
        assert!(parse_job_id("").is_err());
        assert_eq!(
            parse_job_id(" 1"),
            Err(DomainError::InvalidJobId(" 1".to_string()))
        );
        assert!(parse_job_id("1 ").is_err());
    }

    #[test]
    fn test_job_json_shape() {
        let job = Job::new(1, "backup-job");
        let json = serde_json::to_value(&job).unwrap();
        assert_eq!(json, serde_json::json!({"id": 1, "name": "backup-job"}));
    }
}
