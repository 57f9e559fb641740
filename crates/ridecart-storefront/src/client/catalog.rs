//! Catalog read for `StorefrontClient`.

use ridecart_core::VehicleOption;

use crate::error::StorefrontError;
use crate::normalize::normalize_catalog;
use crate::queries::PRODUCTS_QUERY;
use crate::rate_limit::retry_with_backoff;
use crate::types::{ProductsData, ProductsVariables};

use super::StorefrontClient;

impl StorefrontClient {
    /// Fetches and normalizes the vehicle catalog.
    ///
    /// Idempotent, so transient failures (429, 5xx, network) are retried
    /// with exponential backoff. A GraphQL `errors` entry is not retried.
    ///
    /// # Errors
    ///
    /// - [`StorefrontError::CatalogFetch`] carrying the first GraphQL error
    ///   message, or when the response has no `data`.
    /// - [`StorefrontError::RateLimited`] / [`StorefrontError::Http`] /
    ///   [`StorefrontError::UnexpectedStatus`] after retries are exhausted.
    /// - [`StorefrontError::Deserialize`] when the body does not match the
    ///   products shape (not retried).
    pub async fn fetch_catalog(&self) -> Result<Vec<VehicleOption>, StorefrontError> {
        let data = retry_with_backoff(self.max_retries, self.backoff_base_secs, || async move {
            let envelope = self
                .post_graphql::<_, ProductsData>(
                    PRODUCTS_QUERY,
                    ProductsVariables {
                        first: self.page_size,
                    },
                    "products query",
                )
                .await?;

            if let Some(first) = envelope.errors.first() {
                return Err(StorefrontError::CatalogFetch(first.message.clone()));
            }
            envelope
                .data
                .ok_or_else(|| StorefrontError::CatalogFetch("response carried no data".into()))
        })
        .await?;

        let vehicles = normalize_catalog(data);
        tracing::info!(
            domain = %self.domain,
            vehicles = vehicles.len(),
            "catalog fetched"
        );
        Ok(vehicles)
    }
}
