//! HTTP client for the storefront GraphQL endpoint.

mod catalog;
mod checkout;

use std::time::Duration;

use reqwest::{Client, Url};
use ridecart_core::AppConfig;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StorefrontError;
use crate::types::{GraphQlRequest, GraphQlResponse};

pub use checkout::BuyerIdentity;

/// Header carrying the public storefront access token.
pub(super) const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Storefront-Access-Token";

pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// HTTP client for the storefront GraphQL API.
///
/// Non-2xx responses and 429s are surfaced as typed errors. Catalog reads
/// are retried with exponential backoff up to `max_retries` additional
/// attempts; checkout submission is sent exactly once.
pub struct StorefrontClient {
    pub(super) client: Client,
    /// Fully-qualified `.../api/<version>/graphql.json` URL.
    pub(super) endpoint: String,
    pub(super) domain: String,
    pub(super) access_token: String,
    /// `first:` argument of the products query.
    pub(super) page_size: u32,
    /// Maximum number of retry attempts after the first failure.
    pub(super) max_retries: u32,
    /// Base delay in seconds for exponential backoff: `backoff_base_secs * 2^attempt`.
    pub(super) backoff_base_secs: u64,
}

impl StorefrontClient {
    /// Creates a `StorefrontClient` for the store at `store_url`.
    ///
    /// Any path on `store_url` is ignored; requests always go to
    /// `<origin>/api/<api_version>/graphql.json`.
    ///
    /// `max_retries` is the number of additional attempts after the first
    /// failure for retriable catalog errors. Set to `0` to disable retries.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::InvalidStoreUrl`] if `store_url` is not an
    /// absolute http(s) URL with a host, or [`StorefrontError::Http`] if the
    /// underlying `reqwest::Client` cannot be constructed.
    pub fn new(
        store_url: &str,
        api_version: &str,
        access_token: &str,
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, StorefrontError> {
        let (endpoint, domain) = Self::resolve_endpoint(store_url, api_version)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            endpoint,
            domain,
            access_token: access_token.to_owned(),
            page_size: DEFAULT_PAGE_SIZE,
            max_retries,
            backoff_base_secs,
        })
    }

    /// Builds a client from the loaded application config.
    ///
    /// # Errors
    ///
    /// See [`StorefrontClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, StorefrontError> {
        Ok(Self::new(
            &config.storefront_url,
            &config.storefront_api_version,
            &config.storefront_token,
            config.request_timeout_secs,
            &config.user_agent,
            config.max_retries,
            config.retry_backoff_base_secs,
        )?
        .with_page_size(config.catalog_page_size))
    }

    /// Overrides how many products one catalog fetch asks for.
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one GraphQL request and parses the envelope. No retries here;
    /// callers decide whether the operation is safe to repeat.
    pub(super) async fn post_graphql<V, T>(
        &self,
        query: &str,
        variables: V,
        context: &str,
    ) -> Result<GraphQlResponse<T>, StorefrontError>
    where
        V: Serialize + Send,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .json(&GraphQlRequest { query, variables })
            .send()
            .await?;
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after_secs = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(60);

            return Err(StorefrontError::RateLimited {
                domain: self.domain.clone(),
                retry_after_secs,
            });
        }

        if !status.is_success() {
            return Err(StorefrontError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.endpoint.clone(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<GraphQlResponse<T>>(&body).map_err(|e| {
            StorefrontError::Deserialize {
                context: format!("{context} from {}", self.domain),
                source: e,
            }
        })
    }

    /// GraphQL endpoint and host name for a store URL.
    ///
    /// The endpoint path replaces whatever path, query or fragment the store
    /// URL carried, so a collection link works as well as the bare domain.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::InvalidStoreUrl`] for a relative or
    /// non-http(s) URL, a URL without a host, or a blank API version.
    fn resolve_endpoint(
        store_url: &str,
        api_version: &str,
    ) -> Result<(String, String), StorefrontError> {
        let invalid = |reason: String| StorefrontError::InvalidStoreUrl {
            store_url: store_url.to_owned(),
            reason,
        };

        let version = api_version.trim();
        if version.is_empty() {
            return Err(invalid("API version is empty".to_owned()));
        }

        let store = Url::parse(store_url.trim()).map_err(|e| invalid(e.to_string()))?;
        if !matches!(store.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme \"{}\"", store.scheme())));
        }
        let domain = store
            .host_str()
            .map(str::to_owned)
            .ok_or_else(|| invalid("URL has no host".to_owned()))?;

        let endpoint = store
            .join(&format!("/api/{version}/graphql.json"))
            .map_err(|e| invalid(format!("cannot build GraphQL path: {e}")))?;
        Ok((endpoint.to_string(), domain))
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
