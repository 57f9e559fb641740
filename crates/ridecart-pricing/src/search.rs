use ridecart_core::{TripRequest, ValidationError, VehicleOption};

use crate::fare::{calculate_fare, FareQuote};

/// A vehicle that can take the trip, with its price.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleQuote {
    pub vehicle: VehicleOption,
    pub fare: FareQuote,
}

/// Prices every vehicle that can seat the party.
///
/// Vehicles below the passenger count are dropped before any fare is
/// calculated. Results list featured vehicles first, then ascend by amount;
/// ties keep catalog order.
///
/// # Errors
///
/// Returns the trip's own [`ValidationError`], or
/// [`ValidationError::NoVehicleForParty`] when no vehicle is large enough.
pub fn search_vehicles(
    catalog: &[VehicleOption],
    trip: &TripRequest,
) -> Result<Vec<VehicleQuote>, ValidationError> {
    trip.validate()?;

    let passengers = trip.passenger_count();
    let mut quotes: Vec<VehicleQuote> = catalog
        .iter()
        .filter(|v| v.seats(passengers))
        .map(|v| VehicleQuote {
            vehicle: v.clone(),
            fare: calculate_fare(v, trip),
        })
        .collect();

    if quotes.is_empty() {
        return Err(ValidationError::NoVehicleForParty { passengers });
    }

    quotes.sort_by(|a, b| {
        b.vehicle
            .is_featured
            .cmp(&a.vehicle.is_featured)
            .then_with(|| a.fare.amount.cmp(&b.fare.amount))
    });

    tracing::debug!(
        passengers,
        offered = quotes.len(),
        catalog = catalog.len(),
        "priced vehicles for trip"
    );
    Ok(quotes)
}
