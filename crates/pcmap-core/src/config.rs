//! Environment-backed configuration loading.

use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var holds an unparseable value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from env vars already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful when
/// the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var holds an unparseable value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build configuration using the provided env-var lookup function.
///
/// The parsing logic is decoupled from the actual environment so it can be
/// tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default =
        |var: &str, default: &str| lookup(var).unwrap_or_else(|_| default.to_string());

    let parse_u64 = |var: &str, default: u64| -> Result<u64, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            }),
            Err(_) => Ok(default),
        }
    };

    Ok(AppConfig {
        feed_url: or_default("PCMAP_FEED_URL", AppConfig::DEFAULT_FEED_URL),
        request_timeout_secs: parse_u64(
            "PCMAP_REQUEST_TIMEOUT_SECS",
            AppConfig::DEFAULT_REQUEST_TIMEOUT_SECS,
        )?,
        user_agent: or_default("PCMAP_USER_AGENT", AppConfig::DEFAULT_USER_AGENT),
        log_level: or_default("PCMAP_LOG_LEVEL", AppConfig::DEFAULT_LOG_LEVEL),
    })
}
