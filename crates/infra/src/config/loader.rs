//! Configuration loader
//!
//! Loads the API configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes a handful of paths for config files
//! 4. Supports TOML and JSON formats
//!
//! ## Environment Variables
//! - `SHOPTRACK_BASE_URL`: Tracker base URL
//! - `SHOPTRACK_API_KEY`: Shared secret for the `X-API-Key` header
//! - `SHOPTRACK_HTTP_TIMEOUT_SECS`: Optional per-request timeout
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.toml` or `./config.json`
//! 2. `./shoptrack.toml` or `./shoptrack.json`
//! 3. The same names in the parent directory

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use shoptrack_domain::{ApiConfig, Result, ShopTrackError};

/// File representation of the configuration. Normalization (trailing
/// slash trimming, timeout default) happens in [`ApiConfig`] itself.
#[derive(Debug, Deserialize)]
struct RawConfig {
    base_url: String,
    api_key: String,
    #[serde(default)]
    timeout_secs: Option<u64>,
}

impl RawConfig {
    fn into_config(self) -> ApiConfig {
        let config = ApiConfig::new(self.base_url, self.api_key);
        match self.timeout_secs {
            Some(secs) => config.with_timeout(Duration::from_secs(secs)),
            None => config,
        }
    }
}

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `ShopTrackError::Config` if configuration cannot be loaded
/// from either source.
pub fn load() -> Result<ApiConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("configuration loaded from environment variables");
            Ok(config)
        }
        Err(err) => {
            tracing::debug!(error = ?err, "environment incomplete, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables. All required variables
/// must be present.
pub fn load_from_env() -> Result<ApiConfig> {
    let base_url = env_var("SHOPTRACK_BASE_URL")?;
    let api_key = env_var("SHOPTRACK_API_KEY")?;
    let timeout_secs = match std::env::var("SHOPTRACK_HTTP_TIMEOUT_SECS") {
        Ok(raw) => Some(raw.parse::<u64>().map_err(|err| {
            ShopTrackError::Config(format!("invalid SHOPTRACK_HTTP_TIMEOUT_SECS: {err}"))
        })?),
        Err(_) => None,
    };

    Ok(RawConfig { base_url, api_key, timeout_secs }.into_config())
}

/// Load configuration from a file. If `path` is `None`, probes the
/// standard locations; the format is detected by file extension.
pub fn load_from_file(path: Option<PathBuf>) -> Result<ApiConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ShopTrackError::Config(format!(
                    "config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ShopTrackError::Config("no config file found in any standard location".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|err| ShopTrackError::Config(format!("failed to read config file: {err}")))?;

    parse_config(&contents, &config_path)
}

/// Find the first existing config file among the standard locations.
pub fn probe_config_paths() -> Option<PathBuf> {
    const NAMES: [&str; 4] = ["config.toml", "config.json", "shoptrack.toml", "shoptrack.json"];
    for dir in [".", ".."] {
        for name in NAMES {
            let candidate = Path::new(dir).join(name);
            if candidate.exists() {
                return Some(candidate);
            }
        }
    }
    None
}

fn parse_config(contents: &str, path: &Path) -> Result<ApiConfig> {
    let raw: RawConfig = match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(contents)
            .map_err(|err| ShopTrackError::Config(format!("invalid TOML config: {err}")))?,
        Some("json") => serde_json::from_str(contents)
            .map_err(|err| ShopTrackError::Config(format!("invalid JSON config: {err}")))?,
        other => {
            return Err(ShopTrackError::Config(format!(
                "unsupported config format: {other:?}"
            )))
        }
    };
    Ok(raw.into_config())
}

fn env_var(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|_| ShopTrackError::Config(format!("missing environment variable {name}")))
}
