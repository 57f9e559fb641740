use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can drive it with a plain
/// `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let storefront_url = require("RIDECART_STOREFRONT_URL")?;
    let storefront_token = require("RIDECART_STOREFRONT_TOKEN")?;

    let env = parse_environment(&or_default("RIDECART_ENV", "development"))?;
    let log_level = or_default("RIDECART_LOG_LEVEL", "info");
    let storefront_api_version = or_default("RIDECART_STOREFRONT_API_VERSION", "2024-10");

    let catalog_page_size = parse_u32("RIDECART_CATALOG_PAGE_SIZE", "50")?;
    if catalog_page_size == 0 || catalog_page_size > 250 {
        return Err(ConfigError::InvalidEnvVar {
            var: "RIDECART_CATALOG_PAGE_SIZE".to_string(),
            reason: format!("{catalog_page_size} is outside 1..=250"),
        });
    }

    let fees_path = PathBuf::from(or_default(
        "RIDECART_FEES_PATH",
        "./config/ancillary_fees.yaml",
    ));
    let country_code = or_default("RIDECART_COUNTRY_CODE", "AE").to_uppercase();

    let request_timeout_secs = parse_u64("RIDECART_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("RIDECART_USER_AGENT", "ridecart/0.1 (booking-storefront)");
    let max_retries = parse_u32("RIDECART_MAX_RETRIES", "3")?;
    let retry_backoff_base_secs = parse_u64("RIDECART_RETRY_BACKOFF_BASE_SECS", "2")?;

    Ok(AppConfig {
        env,
        log_level,
        storefront_url,
        storefront_token,
        storefront_api_version,
        catalog_page_size,
        fees_path,
        country_code,
        request_timeout_secs,
        user_agent,
        max_retries,
        retry_backoff_base_secs,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvVar`] for anything other than
/// `development`, `test` or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "RIDECART_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
