use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

/// Returns a map with all required env vars populated.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("RIDECART_STOREFRONT_URL", "https://fleet.example.com");
    m.insert("RIDECART_STOREFRONT_TOKEN", "storefront-token");
    m
}

#[test]
fn parse_environment_known_values() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "RIDECART_ENV"));
}

#[test]
fn build_app_config_fails_without_storefront_url() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "RIDECART_STOREFRONT_URL"),
        "expected MissingEnvVar(RIDECART_STOREFRONT_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_treats_blank_token_as_missing() {
    let mut map = full_env();
    map.insert("RIDECART_STOREFRONT_TOKEN", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "RIDECART_STOREFRONT_TOKEN"),
        "expected MissingEnvVar(RIDECART_STOREFRONT_TOKEN), got: {result:?}"
    );
}

#[test]
fn build_app_config_succeeds_with_all_required_vars() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.storefront_url, "https://fleet.example.com");
    assert_eq!(cfg.storefront_api_version, "2024-10");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.catalog_page_size, 50);
    assert_eq!(
        cfg.fees_path.to_str(),
        Some("./config/ancillary_fees.yaml")
    );
    assert_eq!(cfg.country_code, "AE");
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "ridecart/0.1 (booking-storefront)");
    assert_eq!(cfg.max_retries, 3);
    assert_eq!(cfg.retry_backoff_base_secs, 2);
}

#[test]
fn build_app_config_uppercases_country_code() {
    let mut map = full_env();
    map.insert("RIDECART_COUNTRY_CODE", "gb");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.country_code, "GB");
}

#[test]
fn build_app_config_rejects_non_numeric_timeout() {
    let mut map = full_env();
    map.insert("RIDECART_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "RIDECART_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(RIDECART_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_oversized_page() {
    let mut map = full_env();
    map.insert("RIDECART_CATALOG_PAGE_SIZE", "500");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "RIDECART_CATALOG_PAGE_SIZE"),
        "expected InvalidEnvVar(RIDECART_CATALOG_PAGE_SIZE), got: {result:?}"
    );
}

#[test]
fn build_app_config_overrides_retry_policy() {
    let mut map = full_env();
    map.insert("RIDECART_MAX_RETRIES", "0");
    map.insert("RIDECART_RETRY_BACKOFF_BASE_SECS", "10");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.max_retries, 0);
    assert_eq!(cfg.retry_backoff_base_secs, 10);
}

#[test]
fn debug_output_redacts_token() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(rendered.contains("[redacted]"));
    assert!(!rendered.contains("storefront-token"));
}
