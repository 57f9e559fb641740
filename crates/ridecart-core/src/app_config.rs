use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Storefront origin, e.g. `"https://fleet.example.com"`. Any path is ignored.
    pub storefront_url: String,
    pub storefront_token: String,
    pub storefront_api_version: String,
    /// Number of products requested by the catalog query (`first: N`).
    pub catalog_page_size: u32,
    pub fees_path: PathBuf,
    /// ISO 3166 country code sent with the buyer identity at checkout.
    pub country_code: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub max_retries: u32,
    pub retry_backoff_base_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("storefront_url", &self.storefront_url)
            .field("storefront_token", &"[redacted]")
            .field("storefront_api_version", &self.storefront_api_version)
            .field("catalog_page_size", &self.catalog_page_size)
            .field("fees_path", &self.fees_path)
            .field("country_code", &self.country_code)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("max_retries", &self.max_retries)
            .field("retry_backoff_base_secs", &self.retry_backoff_base_secs)
            .finish()
    }
}
