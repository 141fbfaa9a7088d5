use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub results_table: String,
    /// `None` means any origin is allowed (the default).
    pub cors_origins: Option<Vec<String>>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let results_table = require_env("RESULTS_TABLE")?;
        if !is_bare_identifier(&results_table) {
            bail!("RESULTS_TABLE must be a bare SQL identifier, got '{results_table}'");
        }

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            results_table,
            cors_origins: parse_cors_origins(std::env::var("CORS_ORIGINS").ok()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Parses the comma-separated origin allow-list. Unset, empty, or any `*`
/// entry collapses to `None` (allow all).
fn parse_cors_origins(raw: Option<String>) -> Option<Vec<String>> {
    let raw = raw?;
    let origins: Vec<String> = raw
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        None
    } else {
        Some(origins)
    }
}

/// The table name is interpolated into SQL, so it must be a bare identifier.
fn is_bare_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
