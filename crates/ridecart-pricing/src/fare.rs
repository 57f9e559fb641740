//! Fare calculation for transfers (distance tiers or a per-km formula) and
//! daily rentals (half day, full day, or a whole number of days).
//!
//! Pricing intent travels to checkout through the line quantity: a round
//! trip is two of the outbound unit, a three-day rental is three of the
//! full-day unit. The commerce backend's own `quantity × price` is therefore
//! the authoritative total.

use ridecart_core::{
    DistanceTier, RentalKind, RentalTrip, TransferTrip, TripDirection, TripRequest, VehicleOption,
};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::money::{format_money, round_whole};
use crate::resolver::resolve_tier;

/// Hours at or below which a rental is billed as a half day.
pub const HALF_DAY_MAX_HOURS: f64 = 5.0;
/// Hours from which a rental is billed per started day.
pub const MULTI_DAY_MIN_HOURS: f64 = 24.0;

/// Markup for the struck-through "was" price. Display only.
const WAS_PRICE_FACTOR: Decimal = Decimal::from_parts(12, 0, 0, false, 1);

/// How the unit price was arrived at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FareBasis {
    DistanceTier,
    PerKmFormula,
    /// `derived` is `true` when no half-day unit exists and the price is half
    /// the full-day rate.
    HalfDay { derived: bool },
    FullDay,
    MultiDay,
}

/// Duration bracket of a daily rental.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RentalPlan {
    HalfDay,
    FullDay,
    MultiDay { days: u32 },
}

impl RentalPlan {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            RentalPlan::HalfDay => "Half Day",
            RentalPlan::FullDay => "Full Day",
            RentalPlan::MultiDay { .. } => "Multi-Day",
        }
    }

    /// Billable days; half and full days count as one.
    #[must_use]
    pub fn days(self) -> u32 {
        match self {
            RentalPlan::HalfDay | RentalPlan::FullDay => 1,
            RentalPlan::MultiDay { days } => days,
        }
    }
}

/// Classifies a rental by elapsed hours.
///
/// `≤ 5` is a half day, `5 < h < 24` a full day, and `≥ 24` bills
/// `ceil(h / 24)` days, so exactly 24 hours is one day and 25 hours is two.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn classify_rental(hours: f64) -> RentalPlan {
    if hours.is_nan() || hours <= HALF_DAY_MAX_HOURS {
        RentalPlan::HalfDay
    } else if hours < MULTI_DAY_MIN_HOURS {
        RentalPlan::FullDay
    } else {
        RentalPlan::MultiDay {
            days: (hours / MULTI_DAY_MIN_HOURS).ceil() as u32,
        }
    }
}

/// The priced outcome for one vehicle and one trip.
#[derive(Debug, Clone, PartialEq)]
pub struct FareQuote {
    /// `unit_price × quantity`.
    pub amount: Decimal,
    pub unit_price: Decimal,
    pub quantity: u32,
    /// Fare arithmetic in words, restated in the order note.
    pub description: String,
    /// Unit the primary cart line should reference. `None` when no unit sells
    /// at `unit_price`; such a fare can be shown but not booked.
    pub unit_ref: Option<String>,
    pub basis: FareBasis,
    pub currency_code: String,
    /// Set for daily rentals only.
    pub rental: Option<RentalPlan>,
    pub rental_hours: Option<f64>,
}

impl FareQuote {
    /// Promotional strikethrough price, `round(amount × 1.2)`. Never sent to checkout.
    #[must_use]
    pub fn was_price(&self) -> Decimal {
        round_whole(self.amount * WAS_PRICE_FACTOR)
    }

    #[must_use]
    pub fn number_of_days(&self) -> Option<u32> {
        self.rental.map(RentalPlan::days)
    }
}

/// Prices `trip` on `vehicle`.
///
/// Never fails: a missing tier falls back to the per-km formula (transfers)
/// or to a derived rate (rentals). A rental priced from `base_fare` has no
/// matching unit and carries no `unit_ref`. Capacity is not checked here;
/// callers filter vehicles by passenger count first.
#[must_use]
pub fn calculate_fare(vehicle: &VehicleOption, trip: &TripRequest) -> FareQuote {
    match trip {
        TripRequest::Transfer(transfer) => transfer_fare(vehicle, transfer),
        TripRequest::DailyRental(rental) => rental_fare(vehicle, rental),
    }
}

fn transfer_fare(vehicle: &VehicleOption, trip: &TransferTrip) -> FareQuote {
    let currency = vehicle.currency_code.as_str();
    let tiers = vehicle.distance_tiers();

    let (unit_price, unit_ref, basis, leg) = match resolve_tier(&tiers, trip.distance_km) {
        Some(tier) => (
            tier.unit_price,
            Some(tier.tier_id.clone()),
            FareBasis::DistanceTier,
            format!("{} tier at {}", tier.label, format_money(tier.unit_price, currency)),
        ),
        None => {
            let km = trip
                .distance_km
                .filter(|d| d.is_finite() && *d > 0.0)
                .unwrap_or(0.0);
            let km_dec = Decimal::from_f64(km).unwrap_or_default();
            let price = round_whole(vehicle.base_fare + vehicle.per_km_rate * km_dec);
            let leg = format!(
                "{} base + {}/km x {km:.1} km, rounded to {}",
                format_money(vehicle.base_fare, currency),
                format_money(vehicle.per_km_rate, currency),
                format_money(price, currency),
            );
            (
                price,
                vehicle.default_unit_ref.clone(),
                FareBasis::PerKmFormula,
                leg,
            )
        }
    };

    let quantity = match trip.direction {
        TripDirection::OneWay => 1,
        TripDirection::RoundTrip => 2,
    };
    let amount = unit_price * Decimal::from(quantity);
    let legs = match trip.direction {
        TripDirection::OneWay => "1 (one way)",
        TripDirection::RoundTrip => "2 (round trip)",
    };

    FareQuote {
        amount,
        unit_price,
        quantity,
        description: format!("{leg} x {legs} = {}", format_money(amount, currency)),
        unit_ref,
        basis,
        currency_code: vehicle.currency_code.clone(),
        rental: None,
        rental_hours: None,
    }
}

fn rental_fare(vehicle: &VehicleOption, trip: &RentalTrip) -> FareQuote {
    let currency = vehicle.currency_code.as_str();
    let hours = trip.rental_hours();
    let plan = classify_rental(hours);

    // Resolved lazily so a vehicle with only a half-day unit does not warn
    // about its missing full-day unit on half-day bookings.
    let full_day = || -> (Decimal, Option<String>) {
        match vehicle.rental_tier(RentalKind::FullDay) {
            Some(tier) => (tier.unit_price, Some(tier.tier_id.clone())),
            None => {
                tracing::warn!(
                    vehicle = %vehicle.name,
                    base_fare = %vehicle.base_fare,
                    "vehicle has no full-day rental unit; quoting base fare as the daily rate"
                );
                (vehicle.base_fare, None)
            }
        }
    };

    let (unit_price, unit_ref, basis, rate) = match plan {
        RentalPlan::HalfDay => match vehicle.rental_tier(RentalKind::HalfDay) {
            Some(tier) => half_day_from_tier(tier, currency),
            None => {
                let (full_price, full_ref) = full_day();
                let price = full_price / Decimal::TWO;
                tracing::warn!(
                    vehicle = %vehicle.name,
                    "vehicle has no half-day rental unit; billing half the full-day rate"
                );
                (
                    price,
                    full_ref,
                    FareBasis::HalfDay { derived: true },
                    format!(
                        "Half Day rate {} (half of full-day {})",
                        format_money(price, currency),
                        format_money(full_price, currency)
                    ),
                )
            }
        },
        RentalPlan::FullDay => {
            let (price, unit_ref) = full_day();
            let rate = format!("Full Day rate {}", format_money(price, currency));
            (price, unit_ref, FareBasis::FullDay, rate)
        }
        RentalPlan::MultiDay { .. } => {
            let (price, unit_ref) = full_day();
            let rate = format!("Full Day rate {} per day", format_money(price, currency));
            (price, unit_ref, FareBasis::MultiDay, rate)
        }
    };

    let quantity = plan.days();
    let amount = unit_price * Decimal::from(quantity);
    let unit = if quantity == 1 { "day" } else { "days" };

    FareQuote {
        amount,
        unit_price,
        quantity,
        description: format!(
            "{rate} x {quantity} {unit} ({hours:.1} hrs) = {}",
            format_money(amount, currency)
        ),
        unit_ref,
        basis,
        currency_code: vehicle.currency_code.clone(),
        rental: Some(plan),
        rental_hours: Some(hours),
    }
}

fn half_day_from_tier(
    tier: &DistanceTier,
    currency: &str,
) -> (Decimal, Option<String>, FareBasis, String) {
    (
        tier.unit_price,
        Some(tier.tier_id.clone()),
        FareBasis::HalfDay { derived: false },
        format!("Half Day rate {}", format_money(tier.unit_price, currency)),
    )
}

#[cfg(test)]
#[path = "fare_test.rs"]
mod tests;
