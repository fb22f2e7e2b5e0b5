//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, validated before the server
//! starts, and passed explicitly into the handler state. Nothing here is
//! mutable after startup, so it is safe for unsynchronized concurrent reads.
//!
//! ## Variables
//!
//! All variables are optional and fall back to defaults:
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `GEO_API_BASE_URL` - Geolocation provider base URL
//!   (default: `http://ip-api.com`)
//! - `GEO_API_TIMEOUT_MS` - Outbound lookup timeout in milliseconds
//!   (default: 1000)
//! - `ACCEPTED_ACTIONS` - Comma-separated allow-list of trackable actions
//!   (default: `login,logout,buy,review,shopping-cart`)
//! - `BODY_REQUIRED_KEYS` - Comma-separated keys the request body must carry
//!   (default: `ip,resolution`)

use anyhow::Result;
use std::collections::HashSet;
use std::env;

/// Default allow-list of trackable action names.
pub const DEFAULT_ACCEPTED_ACTIONS: &[&str] = &["login", "logout", "buy", "review", "shopping-cart"];

/// Default set of keys the request body must carry.
pub const DEFAULT_BODY_REQUIRED_KEYS: &[&str] = &["ip", "resolution"];

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Base URL of the external geolocation provider.
    pub geo_api_base_url: String,
    /// Timeout for a single outbound geolocation lookup, in milliseconds.
    /// The lookup is attempted exactly once; there is no retry.
    pub geo_api_timeout_ms: u64,
    /// Action names accepted on `POST /track/{action}`.
    pub accepted_actions: HashSet<String>,
    /// Keys that must be present in the request body.
    pub body_required_keys: Vec<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let geo_api_base_url =
            env::var("GEO_API_BASE_URL").unwrap_or_else(|_| "http://ip-api.com".to_string());

        let geo_api_timeout_ms = env::var("GEO_API_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1000);

        let accepted_actions = env::var("ACCEPTED_ACTIONS")
            .map(|v| parse_comma_list(&v))
            .unwrap_or_else(|_| {
                DEFAULT_ACCEPTED_ACTIONS
                    .iter()
                    .map(ToString::to_string)
                    .collect()
            })
            .into_iter()
            .collect();

        let body_required_keys = env::var("BODY_REQUIRED_KEYS")
            .map(|v| parse_comma_list(&v))
            .unwrap_or_else(|_| {
                DEFAULT_BODY_REQUIRED_KEYS
                    .iter()
                    .map(ToString::to_string)
                    .collect()
            });

        Self {
            listen_addr,
            log_level,
            log_format,
            geo_api_base_url,
            geo_api_timeout_ms,
            accepted_actions,
            body_required_keys,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    /// - `geo_api_base_url` is not an HTTP(S) URL
    /// - `geo_api_timeout_ms` is zero or unreasonably large
    /// - `accepted_actions` is empty
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.geo_api_base_url.starts_with("http://")
            && !self.geo_api_base_url.starts_with("https://")
        {
            anyhow::bail!(
                "GEO_API_BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.geo_api_base_url
            );
        }

        if self.geo_api_timeout_ms == 0 {
            anyhow::bail!("GEO_API_TIMEOUT_MS must be greater than 0");
        }

        if self.geo_api_timeout_ms > 60_000 {
            anyhow::bail!(
                "GEO_API_TIMEOUT_MS is too large (max: 60000), got {}",
                self.geo_api_timeout_ms
            );
        }

        if self.accepted_actions.is_empty() {
            anyhow::bail!("ACCEPTED_ACTIONS must not be empty");
        }

        // An empty required-key set is legal: body presence checks then pass
        // trivially and the handler falls back to its own ip-presence guard.

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Geo provider: {}", self.geo_api_base_url);
        tracing::info!("  Geo lookup timeout: {}ms", self.geo_api_timeout_ms);
        tracing::info!("  Accepted actions: {}", {
            let mut actions: Vec<_> = self.accepted_actions.iter().cloned().collect();
            actions.sort();
            actions.join(", ")
        });
        tracing::info!("  Required body keys: {}", self.body_required_keys.join(", "));
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Splits a comma-separated list, trimming whitespace and dropping empties.
fn parse_comma_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
