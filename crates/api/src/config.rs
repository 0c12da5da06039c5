//! Server configuration.
//!
//! Everything is read from the environment once at startup; `dotenvy`
//! in `main` loads a local `.env` first. A value that fails to parse
//! aborts startup rather than running with a half-applied config.

use std::env;
use std::fmt::Debug;
use std::str::FromStr;

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Allowed CORS origins for the dashboard frontend.
    pub cors_origins: Vec<String>,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Grace period for in-flight requests on shutdown, in seconds.
    #[allow(dead_code)]
    pub shutdown_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from the environment.
    ///
    /// | Env var                 | Default                 |
    /// |-------------------------|-------------------------|
    /// | `HOST`                  | `0.0.0.0`               |
    /// | `PORT`                  | `3000`                  |
    /// | `CORS_ORIGINS`          | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                    |
    /// | `SHUTDOWN_TIMEOUT_SECS` | `30`                    |
    ///
    /// `CORS_ORIGINS` is comma-separated; blank entries are dropped.
    pub fn from_env() -> Self {
        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: parsed_env("PORT", 3000),
            cors_origins,
            request_timeout_secs: parsed_env("REQUEST_TIMEOUT_SECS", 30),
            shutdown_timeout_secs: parsed_env("SHUTDOWN_TIMEOUT_SECS", 30),
        }
    }
}

/// Read and parse one environment variable, falling back to `default`
/// when unset. Panics on a set-but-unparseable value.
fn parsed_env<T>(name: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Debug,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|e| panic!("{name} is not valid: {e:?}")),
        Err(_) => default,
    }
}
