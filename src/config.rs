//! Runtime configuration loaded from environment variables.
//!
//! # Variables
//!
//! | Variable       | Default                      |
//! |----------------|------------------------------|
//! | `API_BASE_URL` | `http://localhost:8000/api`  |
//! | `API_TIMEOUT`  | `5.0` (seconds)              |
//! | `ENVIRONMENT`  | `development`                |
//! | `DEBUG`        | `true`                       |
//! | `LOG_LEVEL`    | `DEBUG` (dev) / `INFO` (prod)|
//! | `LOG_DIR`      | `logs`                       |
//!
//! A `.env` file in the working directory is loaded first when present.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_API_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    /// Only the exact value `production` selects production mode.
    fn parse(value: &str) -> Self {
        if value == "production" {
            Environment::Production
        } else {
            Environment::Development
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

/// Application configuration.
///
/// # Example
///
/// ```ignore
/// use job_organizer::config::Config;
///
/// let config = Config::default()
///     .with_base_url("http://localhost:9000/api")
///     .with_timeout(Duration::from_secs(2));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the job-organizer API, without trailing endpoint
    pub api_base_url: String,
    /// Timeout for data fetches (stats, jobs)
    pub api_timeout: Duration,
    pub environment: Environment,
    pub debug: bool,
    /// Tracing filter level (e.g. `INFO`, `DEBUG`)
    pub log_level: String,
    /// Directory for rolling log files
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_timeout: DEFAULT_API_TIMEOUT,
            environment: Environment::Development,
            debug: true,
            log_level: "DEBUG".to_string(),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
        }
    }
}

impl Config {
    /// Load configuration from the process environment (and `.env`).
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Unparseable values fall back to their defaults.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT")
            .map(|v| Environment::parse(&v))
            .unwrap_or_default();

        let api_base_url = lookup("API_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let api_timeout = lookup("API_TIMEOUT")
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|secs| *secs > 0.0)
            .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
            .unwrap_or(DEFAULT_API_TIMEOUT);

        let debug = lookup("DEBUG")
            .map(|v| v.to_lowercase() == "true")
            .unwrap_or(true);

        let default_level = match environment {
            Environment::Development => "DEBUG",
            Environment::Production => "INFO",
        };
        let log_level = lookup("LOG_LEVEL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| default_level.to_string());

        let log_dir = lookup("LOG_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR));

        Self {
            api_base_url,
            api_timeout,
            environment,
            debug,
            log_level,
            log_dir,
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.api_timeout = timeout;
        self
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = dir.into();
        self
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Full URL for an API endpoint, joined with exactly one slash.
    pub fn api_url(&self, endpoint: &str) -> String {
        join_url(&self.api_base_url, endpoint)
    }
}

/// Join a base URL and a path with exactly one `/` between them.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
