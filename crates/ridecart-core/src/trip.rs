//! Per-search trip requests and their pre-submission validation.
//!
//! A trip is built by the caller from form input plus whatever the
//! geocoding and routing collaborators returned; nothing here performs I/O.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// User-visible, blocking problems with a trip, raised before any network call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("a round trip needs a return date and time")]
    MissingReturnLeg,

    #[error("the return must be after the outbound pickup")]
    ReturnBeforePickup,

    #[error("the drop-off must be after the pickup")]
    NonPositiveDuration,

    #[error("at least one passenger is required")]
    NoPassengers,

    #[error("no vehicle in the catalog can seat {passengers} passengers")]
    NoVehicleForParty { passengers: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A location as supplied by the places-autocomplete collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub label: String,
    pub coordinates: Option<Coordinates>,
}

impl Place {
    #[must_use]
    pub fn new(label: impl Into<String>, coordinates: Option<Coordinates>) -> Self {
        Self {
            label: label.into(),
            coordinates,
        }
    }

    /// Coordinates present means a route distance can be requested.
    #[must_use]
    pub fn has_coordinates(&self) -> bool {
        self.coordinates.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripDirection {
    OneWay,
    RoundTrip,
}

impl TripDirection {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TripDirection::OneWay => "One-Way",
            TripDirection::RoundTrip => "Round Trip",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferTrip {
    pub origin: Place,
    pub destination: Place,
    /// Route distance from the routing collaborator; `None` until computed.
    pub distance_km: Option<f64>,
    /// Human-readable drive time, e.g. `"1 hr 5 mins"`.
    pub eta_label: Option<String>,
    pub direction: TripDirection,
    pub pickup_date: NaiveDate,
    pub pickup_time: NaiveTime,
    pub return_date: Option<NaiveDate>,
    pub return_time: Option<NaiveTime>,
    pub passenger_count: u32,
}

impl TransferTrip {
    #[must_use]
    pub fn pickup_at(&self) -> NaiveDateTime {
        self.pickup_date.and_time(self.pickup_time)
    }

    /// Return pickup, when both halves are present.
    #[must_use]
    pub fn return_at(&self) -> Option<NaiveDateTime> {
        Some(self.return_date?.and_time(self.return_time?))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalTrip {
    pub pickup: Place,
    pub pickup_date: NaiveDate,
    pub pickup_time: NaiveTime,
    pub dropoff_date: NaiveDate,
    pub dropoff_time: NaiveTime,
    pub passenger_count: u32,
}

impl RentalTrip {
    #[must_use]
    pub fn pickup_at(&self) -> NaiveDateTime {
        self.pickup_date.and_time(self.pickup_time)
    }

    #[must_use]
    pub fn dropoff_at(&self) -> NaiveDateTime {
        self.dropoff_date.and_time(self.dropoff_time)
    }

    /// Elapsed hours between pickup and drop-off, clamped at zero.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn rental_hours(&self) -> f64 {
        let seconds = (self.dropoff_at() - self.pickup_at()).num_seconds();
        (seconds as f64 / 3600.0).max(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TripRequest {
    Transfer(TransferTrip),
    DailyRental(RentalTrip),
}

impl TripRequest {
    #[must_use]
    pub fn passenger_count(&self) -> u32 {
        match self {
            TripRequest::Transfer(t) => t.passenger_count,
            TripRequest::DailyRental(r) => r.passenger_count,
        }
    }

    /// Checks the fields a booking cannot proceed without.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.passenger_count() == 0 {
            return Err(ValidationError::NoPassengers);
        }

        match self {
            TripRequest::Transfer(t) => {
                if t.origin.label.trim().is_empty() {
                    return Err(ValidationError::MissingField("pickup location"));
                }
                if t.destination.label.trim().is_empty() {
                    return Err(ValidationError::MissingField("drop-off location"));
                }
                if t.direction == TripDirection::RoundTrip {
                    let return_at = t.return_at().ok_or(ValidationError::MissingReturnLeg)?;
                    if return_at <= t.pickup_at() {
                        return Err(ValidationError::ReturnBeforePickup);
                    }
                }
                Ok(())
            }
            TripRequest::DailyRental(r) => {
                if r.pickup.label.trim().is_empty() {
                    return Err(ValidationError::MissingField("pickup location"));
                }
                if r.rental_hours() <= 0.0 {
                    return Err(ValidationError::NonPositiveDuration);
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 11, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn transfer(direction: TripDirection) -> TransferTrip {
        TransferTrip {
            origin: Place::new(
                "Dubai International Airport",
                Some(Coordinates {
                    lat: 25.2532,
                    lng: 55.3657,
                }),
            ),
            destination: Place::new("Palm Jumeirah", None),
            distance_km: Some(32.5),
            eta_label: Some("35 mins".to_string()),
            direction,
            pickup_date: date(2),
            pickup_time: time(9, 0),
            return_date: None,
            return_time: None,
            passenger_count: 2,
        }
    }

    fn rental(dropoff_day: u32, dropoff: NaiveTime) -> RentalTrip {
        RentalTrip {
            pickup: Place::new("Downtown Dubai", None),
            pickup_date: date(1),
            pickup_time: time(9, 0),
            dropoff_date: date(dropoff_day),
            dropoff_time: dropoff,
            passenger_count: 3,
        }
    }

    #[test]
    fn rental_hours_combine_date_and_time() {
        assert!((rental(4, time(9, 0)).rental_hours() - 72.0).abs() < f64::EPSILON);
        assert!((rental(1, time(14, 30)).rental_hours() - 5.5).abs() < f64::EPSILON);
    }

    #[test]
    fn rental_hours_clamp_negative_to_zero() {
        let r = rental(1, time(8, 0));
        assert!(r.rental_hours().abs() < f64::EPSILON);
    }

    #[test]
    fn validate_rejects_non_positive_rental() {
        let trip = TripRequest::DailyRental(rental(1, time(9, 0)));
        assert_eq!(trip.validate(), Err(ValidationError::NonPositiveDuration));
    }

    #[test]
    fn validate_accepts_one_way_transfer() {
        let trip = TripRequest::Transfer(transfer(TripDirection::OneWay));
        assert_eq!(trip.validate(), Ok(()));
    }

    #[test]
    fn validate_requires_return_leg_for_round_trip() {
        let trip = TripRequest::Transfer(transfer(TripDirection::RoundTrip));
        assert_eq!(trip.validate(), Err(ValidationError::MissingReturnLeg));
    }

    #[test]
    fn validate_rejects_return_before_pickup() {
        let mut t = transfer(TripDirection::RoundTrip);
        t.return_date = Some(date(2));
        t.return_time = Some(time(8, 0));
        let trip = TripRequest::Transfer(t);
        assert_eq!(trip.validate(), Err(ValidationError::ReturnBeforePickup));
    }

    #[test]
    fn validate_rejects_blank_destination() {
        let mut t = transfer(TripDirection::OneWay);
        t.destination.label = "  ".to_string();
        let trip = TripRequest::Transfer(t);
        assert_eq!(
            trip.validate(),
            Err(ValidationError::MissingField("drop-off location"))
        );
    }

    #[test]
    fn validate_rejects_zero_passengers() {
        let mut t = transfer(TripDirection::OneWay);
        t.passenger_count = 0;
        assert_eq!(
            TripRequest::Transfer(t).validate(),
            Err(ValidationError::NoPassengers)
        );
    }

    #[test]
    fn place_with_coordinates_is_distance_capable() {
        let t = transfer(TripDirection::OneWay);
        assert!(t.origin.has_coordinates());
        assert!(!t.destination.has_coordinates());
    }
}
