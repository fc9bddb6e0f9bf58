//! CLI configuration — TOML file plus `SHOPDASH_*` environment overrides.
//!
//! Resolution order for every setting: CLI flag > environment > config
//! file > built-in default.

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Base URL used when nothing is configured (the API's default bind).
const DEFAULT_API_URL: &str = "http://localhost:5000";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ── Config file shape ───────────────────────────────────────────────

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// API base URL.
    pub api_url: Option<String>,

    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

/// Path of the config file (`~/.config/shopdash/config.toml` on Linux).
pub fn config_path() -> PathBuf {
    directories::ProjectDirs::from("", "", "shopdash")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("shopdash.toml"))
}

/// Load configuration from file and environment; absent file is fine.
pub fn load_config() -> Result<Config, CliError> {
    let config = Figment::from(Serialized::defaults(Config::default()))
        .merge(Toml::file(config_path()))
        .merge(Env::prefixed("SHOPDASH_").only(&["api_url", "timeout_secs"]))
        .extract()?;
    Ok(config)
}

// ── Resolution ──────────────────────────────────────────────────────

/// Resolved settings for building an API client.
#[derive(Debug, Clone)]
pub struct Resolved {
    pub api_url: String,
    pub timeout: Duration,
}

/// Combine CLI flags (which clap already filled from `SHOPDASH_*` env
/// vars where applicable) with the config file.
pub fn resolve(global: &GlobalOpts, config: &Config) -> Resolved {
    let api_url = global
        .api_url
        .clone()
        .or_else(|| config.api_url.clone())
        .unwrap_or_else(|| DEFAULT_API_URL.to_owned());

    let timeout_secs = global
        .timeout
        .or(config.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    Resolved {
        api_url,
        timeout: Duration::from_secs(timeout_secs),
    }
}
