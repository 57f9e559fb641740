//! The seam between booking logic and the remote storefront.

use std::future::Future;

use ridecart_core::VehicleOption;
use ridecart_pricing::CheckoutPlan;

use crate::client::{BuyerIdentity, StorefrontClient};
use crate::error::StorefrontError;

/// Catalog source and checkout sink.
///
/// [`StorefrontClient`] is the production implementation; sessions are
/// generic over this trait so they can run against an in-memory fake.
pub trait Storefront {
    /// Fetches the full, normalized vehicle catalog. Safe to retry.
    fn fetch_catalog(
        &self,
    ) -> impl Future<Output = Result<Vec<VehicleOption>, StorefrontError>> + Send;

    /// Creates a remote cart and returns its checkout URL. Not idempotent.
    fn submit_checkout(
        &self,
        plan: &CheckoutPlan,
        buyer: Option<&BuyerIdentity>,
    ) -> impl Future<Output = Result<String, StorefrontError>> + Send;
}

impl Storefront for StorefrontClient {
    async fn fetch_catalog(&self) -> Result<Vec<VehicleOption>, StorefrontError> {
        StorefrontClient::fetch_catalog(self).await
    }

    async fn submit_checkout(
        &self,
        plan: &CheckoutPlan,
        buyer: Option<&BuyerIdentity>,
    ) -> Result<String, StorefrontError> {
        StorefrontClient::submit_checkout(self, plan, buyer).await
    }
}
