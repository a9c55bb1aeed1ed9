use anyhow::{anyhow, Context, Result};
use chrono_tz::Tz;

/// Application configuration loaded from environment variables.
/// Fails at startup if a value is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Zone whose calendar date counts as "today" for deadlines.
    pub timezone: Tz,
    /// Base URL of the workspace REST backend. Forwarding endpoints are
    /// disabled when unset.
    pub backend_url: Option<String>,
    pub backend_token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            timezone: chrono_tz::America::New_York,
            backend_url: None,
            backend_token: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            timezone: parse_timezone(
                &std::env::var("WORKSPACE_TIMEZONE")
                    .unwrap_or_else(|_| "America/New_York".to_string()),
            )?,
            backend_url: optional_env("BACKEND_URL"),
            backend_token: optional_env("BACKEND_TOKEN"),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|e| anyhow!("WORKSPACE_TIMEZONE '{name}' is not a valid IANA zone: {e}"))
}
