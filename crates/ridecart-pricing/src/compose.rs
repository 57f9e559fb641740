//! Checkout composition: turns a priced selection into cart lines,
//! cart attributes and an order note.
//!
//! Attributes are for backend record-keeping only. Pricing is carried
//! entirely by each line's unit reference and quantity.

use ridecart_core::{
    FeeEntry, FeeTable, RentalTrip, TransferTrip, TripDirection, TripRequest, VehicleOption,
};
use thiserror::Error;

use crate::fare::FareQuote;
use crate::money::format_money;
use crate::note::order_note;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComposeError {
    #[error("vehicle \"{vehicle}\" has no purchasable unit to put in the cart")]
    NoPurchasableUnit { vehicle: String },
    #[error("vehicle \"{vehicle}\" has no unit that sells at the quoted rate of {rate}")]
    NoUnitForRate { vehicle: String, rate: String },
}

/// A key/value pair attached to a cart or a cart line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

impl Attribute {
    fn new(key: &str, value: impl Into<String>) -> Self {
        Self {
            key: key.to_string(),
            value: value.into(),
        }
    }
}

/// One request to add a purchasable unit to the remote cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutLineItem {
    pub unit_ref: String,
    /// Always at least 1.
    pub quantity: u32,
    pub attributes: Vec<Attribute>,
}

/// Everything the checkout mutation needs apart from the buyer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutPlan {
    pub lines: Vec<CheckoutLineItem>,
    pub cart_attributes: Vec<Attribute>,
    pub note: String,
}

impl CheckoutPlan {
    /// Value of the cart attribute `key`, if set.
    #[must_use]
    pub fn cart_attribute(&self, key: &str) -> Option<&str> {
        self.cart_attributes
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
    }
}

/// Builds the checkout submission for `vehicle` on `trip` priced at `fare`.
///
/// Emits one primary line and, when `fees` has an entry for the vehicle's
/// category, a second single-quantity fee line. A missing fee entry is
/// logged and the booking proceeds without it.
///
/// # Errors
///
/// - [`ComposeError::NoPurchasableUnit`] for a product with no units.
/// - [`ComposeError::NoUnitForRate`] when the fare was derived from
///   `base_fare` and no unit sells at that rate, so the backend's
///   `quantity × price` could not match the quote.
pub fn compose_checkout(
    vehicle: &VehicleOption,
    trip: &TripRequest,
    fare: &FareQuote,
    fees: &FeeTable,
) -> Result<CheckoutPlan, ComposeError> {
    let unit_ref = match (&fare.unit_ref, &vehicle.default_unit_ref) {
        (Some(unit_ref), _) => unit_ref.clone(),
        (None, None) => {
            return Err(ComposeError::NoPurchasableUnit {
                vehicle: vehicle.name.clone(),
            })
        }
        (None, Some(_)) => {
            return Err(ComposeError::NoUnitForRate {
                vehicle: vehicle.name.clone(),
                rate: format_money(fare.unit_price, &fare.currency_code),
            })
        }
    };

    let attributes = match trip {
        TripRequest::Transfer(transfer) => transfer_attributes(transfer, fare),
        TripRequest::DailyRental(rental) => rental_attributes(rental, fare),
    };

    let fee = fees.lookup(&vehicle.category);
    if fee.is_none() {
        tracing::warn!(
            vehicle = %vehicle.name,
            category = %vehicle.category,
            "no ancillary fee configured for vehicle category; booking without fee line"
        );
    }

    let mut cart_attributes = attributes.clone();
    cart_attributes.push(Attribute::new("vehicle", vehicle.name.clone()));
    cart_attributes.push(Attribute::new("vehicle_category", vehicle.category.clone()));
    cart_attributes.push(Attribute::new(
        "parking_fee_included",
        if fee.is_some() { "yes" } else { "no" },
    ));

    let mut lines = vec![CheckoutLineItem {
        unit_ref,
        quantity: fare.quantity.max(1),
        attributes,
    }];
    if let Some(fee) = fee {
        lines.push(fee_line(fee, vehicle));
    }

    Ok(CheckoutPlan {
        lines,
        cart_attributes,
        note: order_note(vehicle, trip, fare, fee),
    })
}

fn fee_line(fee: &FeeEntry, vehicle: &VehicleOption) -> CheckoutLineItem {
    CheckoutLineItem {
        unit_ref: fee.unit_ref.clone(),
        quantity: 1,
        attributes: vec![
            Attribute::new("fee_type", fee.label.clone()),
            Attribute::new("vehicle_category", vehicle.category.clone()),
        ],
    }
}

fn transfer_attributes(trip: &TransferTrip, fare: &FareQuote) -> Vec<Attribute> {
    let round_trip = trip.direction == TripDirection::RoundTrip;

    let distance = match trip.distance_km {
        Some(km) if round_trip => format!("{km:.1} km (each way)"),
        Some(km) => format!("{km:.1} km"),
        None => "Not calculated".to_string(),
    };

    let mut attrs = vec![
        Attribute::new("trip_type", trip.direction.label()),
        Attribute::new("pickup_location", trip.origin.label.clone()),
        Attribute::new("dropoff_location", trip.destination.label.clone()),
        Attribute::new("distance", distance),
        Attribute::new(
            "duration",
            trip.eta_label
                .clone()
                .unwrap_or_else(|| "Not calculated".to_string()),
        ),
        Attribute::new("pickup_date", trip.pickup_date.format(DATE_FORMAT).to_string()),
        Attribute::new("pickup_time", trip.pickup_time.format(TIME_FORMAT).to_string()),
    ];

    if round_trip {
        if let Some(date) = trip.return_date {
            attrs.push(Attribute::new(
                "return_date",
                date.format(DATE_FORMAT).to_string(),
            ));
        }
        if let Some(time) = trip.return_time {
            attrs.push(Attribute::new(
                "return_time",
                time.format(TIME_FORMAT).to_string(),
            ));
        }
    }

    attrs.push(Attribute::new("passengers", trip.passenger_count.to_string()));
    attrs.push(Attribute::new(
        "total_fare",
        format_money(fare.amount, &fare.currency_code),
    ));
    attrs
}

fn rental_attributes(trip: &RentalTrip, fare: &FareQuote) -> Vec<Attribute> {
    let rental_type = fare.rental.map_or("Daily Rental", |plan| plan.label());
    let hours = fare.rental_hours.unwrap_or_else(|| trip.rental_hours());
    let days = fare.number_of_days().unwrap_or(fare.quantity);

    vec![
        Attribute::new("rental_type", rental_type),
        Attribute::new("pickup_location", trip.pickup.label.clone()),
        Attribute::new("pickup_date", trip.pickup_date.format(DATE_FORMAT).to_string()),
        Attribute::new("pickup_time", trip.pickup_time.format(TIME_FORMAT).to_string()),
        Attribute::new(
            "dropoff_date",
            trip.dropoff_date.format(DATE_FORMAT).to_string(),
        ),
        Attribute::new(
            "dropoff_time",
            trip.dropoff_time.format(TIME_FORMAT).to_string(),
        ),
        Attribute::new("rental_hours", format!("{hours:.1}")),
        Attribute::new("number_of_days", days.to_string()),
        Attribute::new("passengers", trip.passenger_count.to_string()),
        Attribute::new(
            "total_fare",
            format_money(fare.amount, &fare.currency_code),
        ),
    ]
}

#[cfg(test)]
#[path = "compose_test.rs"]
mod tests;
