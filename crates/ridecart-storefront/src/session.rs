//! A booking session over one storefront.
//!
//! The catalog is small and changes rarely, so it is fetched at most once
//! per session and only refetched on an explicit [`CatalogSession::refresh`]
//! or after [`CatalogSession::invalidate`].

use ridecart_core::{FeeTable, TripRequest, ValidationError, VehicleOption};
use ridecart_pricing::{
    calculate_fare, compose_checkout, search_vehicles, CheckoutPlan, FareQuote, VehicleQuote,
};

use crate::client::BuyerIdentity;
use crate::error::{BookingError, StorefrontError};
use crate::gateway::Storefront;

/// Result of a submitted checkout.
#[derive(Debug, Clone)]
pub struct Booking {
    /// Hosted checkout page the buyer is redirected to.
    pub checkout_url: String,
    pub fare: FareQuote,
    pub plan: CheckoutPlan,
}

pub struct CatalogSession<S> {
    source: S,
    fees: FeeTable,
    catalog: Vec<VehicleOption>,
    initialized: bool,
}

impl<S: Storefront> CatalogSession<S> {
    #[must_use]
    pub fn new(source: S, fees: FeeTable) -> Self {
        Self {
            source,
            fees,
            catalog: Vec::new(),
            initialized: false,
        }
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The catalog, fetched on first use.
    ///
    /// A failed first fetch leaves the session uninitialized, so the next
    /// call tries again.
    ///
    /// # Errors
    ///
    /// Propagates the [`StorefrontError`] of the fetch.
    pub async fn vehicles(&mut self) -> Result<&[VehicleOption], StorefrontError> {
        if !self.initialized {
            self.catalog = self.source.fetch_catalog().await?;
            self.initialized = true;
        }
        Ok(&self.catalog)
    }

    /// Refetches the catalog. On failure the previous catalog stays in place.
    ///
    /// # Errors
    ///
    /// Propagates the [`StorefrontError`] of the fetch.
    pub async fn refresh(&mut self) -> Result<&[VehicleOption], StorefrontError> {
        match self.source.fetch_catalog().await {
            Ok(catalog) => {
                self.catalog = catalog;
                self.initialized = true;
                Ok(&self.catalog)
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    cached = self.catalog.len(),
                    "catalog refresh failed; keeping previous catalog"
                );
                Err(e)
            }
        }
    }

    /// Marks the cached catalog stale; the next [`Self::vehicles`] refetches.
    pub fn invalidate(&mut self) {
        self.initialized = false;
    }

    /// Looks a vehicle up in the cached catalog. Never fetches.
    #[must_use]
    pub fn find(&self, vehicle_id: u64) -> Option<&VehicleOption> {
        self.catalog.iter().find(|v| v.id == vehicle_id)
    }

    /// Priced vehicles for `trip`, fetching the catalog if needed.
    ///
    /// # Errors
    ///
    /// A [`ValidationError`] for an invalid trip or oversized party, or the
    /// catalog fetch failure.
    pub async fn search(&mut self, trip: &TripRequest) -> Result<Vec<VehicleQuote>, BookingError> {
        trip.validate()?;
        let catalog = self.vehicles().await?;
        Ok(search_vehicles(catalog, trip)?)
    }

    /// Prices `trip` on one vehicle, composes the cart and submits it.
    ///
    /// Checkout is submitted once. A failure is returned as-is for the user
    /// to re-trigger.
    ///
    /// # Errors
    ///
    /// - [`BookingError::Validation`] for an invalid trip or a vehicle too
    ///   small for the party.
    /// - [`BookingError::UnknownVehicle`] when `vehicle_id` is not listed.
    /// - [`BookingError::Compose`] when the vehicle has no purchasable unit.
    /// - [`BookingError::Storefront`] for fetch or checkout failures.
    pub async fn checkout(
        &mut self,
        vehicle_id: u64,
        trip: &TripRequest,
        buyer: Option<&BuyerIdentity>,
    ) -> Result<Booking, BookingError> {
        trip.validate()?;
        self.vehicles().await?;

        let vehicle = self
            .find(vehicle_id)
            .ok_or(BookingError::UnknownVehicle(vehicle_id))?;
        let passengers = trip.passenger_count();
        if !vehicle.seats(passengers) {
            return Err(ValidationError::NoVehicleForParty { passengers }.into());
        }

        let fare = calculate_fare(vehicle, trip);
        let plan = compose_checkout(vehicle, trip, &fare, &self.fees)?;
        let checkout_url = self.source.submit_checkout(&plan, buyer).await?;

        tracing::info!(
            vehicle = %vehicle.name,
            amount = %fare.amount,
            "booking submitted"
        );
        Ok(Booking {
            checkout_url,
            fare,
            plan,
        })
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
