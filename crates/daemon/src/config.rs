//! Server configuration from environment variables
//!
//! | Variable | Default |
//! |---|---|
//! | `JOBKEEPER_DATABASE_URL` | `~/.jobkeeper/jobs.db` |
//! | `JOBKEEPER_HOST` | `0.0.0.0` |
//! | `JOBKEEPER_PORT` | `8080` |
//! | `JOBKEEPER_DB_MAX_CONNECTIONS` | `10` |
//! | `JOBKEEPER_LOG_FORMAT` | `pretty` |

use jobkeeper_api_http::HttpServerConfig;
use jobkeeper_core::error::{AppError, Result};
use jobkeeper_infra_sqlite::PoolSettings;
use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_DATABASE_URL: &str = "~/.jobkeeper/jobs.db";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub http: HttpServerConfig,
    pub pool: PoolSettings,
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup` (key -> value)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("JOBKEEPER_DATABASE_URL")
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let database_url = shellexpand::tilde(&database_url).into_owned();

        let mut http = HttpServerConfig::default();
        if let Some(host) = lookup("JOBKEEPER_HOST") {
            http.host = host;
        }
        if let Some(port) = parse_var(&lookup, "JOBKEEPER_PORT")? {
            http.port = port;
        }

        let mut pool = PoolSettings::default();
        if let Some(max) = parse_var(&lookup, "JOBKEEPER_DB_MAX_CONNECTIONS")? {
            if max == 0 {
                return Err(AppError::Config(
                    "JOBKEEPER_DB_MAX_CONNECTIONS must be at least 1".to_string(),
                ));
            }
            pool.max_connections = max;
        }

        let log_format = match lookup("JOBKEEPER_LOG_FORMAT").as_deref() {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(AppError::Config(format!(
                    "JOBKEEPER_LOG_FORMAT must be 'pretty' or 'json', got '{}'",
                    other
                )))
            }
        };

        Ok(Self {
            database_url,
            http,
            pool,
            log_format,
        })
    }

    /// Directory that must exist before SQLite can create the database file.
    /// `None` for in-memory databases.
    pub fn database_dir(&self) -> Option<PathBuf> {
        if self.database_url.contains(":memory:") || self.database_url.contains("mode=memory") {
            return None;
        }

        let path = self
            .database_url
            .trim_start_matches("sqlite://")
            .trim_start_matches("sqlite:");
        let path = path.split('?').next().unwrap_or(path);

        PathBuf::from(path)
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(|dir| dir.to_path_buf())
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| AppError::Config(format!("{} = '{}': {}", key, raw, e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<ServerConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert!(config.database_url.ends_with(".jobkeeper/jobs.db"));
        assert!(!config.database_url.starts_with('~'));
        assert_eq!(config.http.port, 8080);
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.pool.max_connections, 10);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("JOBKEEPER_DATABASE_URL", "sqlite::memory:"),
            ("JOBKEEPER_HOST", "127.0.0.1"),
            ("JOBKEEPER_PORT", "9090"),
            ("JOBKEEPER_DB_MAX_CONNECTIONS", "4"),
            ("JOBKEEPER_LOG_FORMAT", "json"),
        ])
        .unwrap();

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.http.addr(), "127.0.0.1:9090");
        assert_eq!(config.pool.max_connections, 4);
        assert_eq!(config.log_format, LogFormat::Json);
        assert!(config.database_dir().is_none());
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            config_from(&[("JOBKEEPER_PORT", "eighty")]),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            config_from(&[("JOBKEEPER_DB_MAX_CONNECTIONS", "0")]),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            config_from(&[("JOBKEEPER_LOG_FORMAT", "xml")]),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_database_dir() {
        let config = config_from(&[(
            "JOBKEEPER_DATABASE_URL",
            "sqlite:///var/lib/jk/jobs.db?mode=rwc",
        )])
        .unwrap();
        assert_eq!(config.database_dir(), Some(PathBuf::from("/var/lib/jk")));

        let config = config_from(&[("JOBKEEPER_DATABASE_URL", "jobs.db")]).unwrap();
        assert_eq!(config.database_dir(), None);
    }
}
