//! Fixture builders shared by the unit tests in this crate.

use chrono::{NaiveDate, NaiveTime};
use ridecart_core::{
    Coordinates, DistanceTier, Place, RentalTrip, TransferTrip, TripDirection, UnitKind,
    VehicleOption,
};
use rust_decimal::Decimal;

pub(crate) fn distance_tier(id: &str, min: u32, max: u32, price: i64) -> DistanceTier {
    DistanceTier {
        tier_id: format!("gid://shopify/ProductVariant/{id}"),
        label: format!("{min}-{max} km"),
        unit_price: Decimal::from(price),
        range_min: min,
        range_max: max,
        kind: UnitKind::Distance,
    }
}

pub(crate) fn rental_tier(id: &str, kind: UnitKind, price: i64) -> DistanceTier {
    let label = match kind {
        UnitKind::HalfDayRental => "Daily Rental - Half Day",
        _ => "Daily Rental - Full Day",
    };
    DistanceTier {
        tier_id: format!("gid://shopify/ProductVariant/{id}"),
        label: label.to_string(),
        unit_price: Decimal::from(price),
        range_min: 0,
        range_max: 50,
        kind,
    }
}

pub(crate) fn vehicle(price_tiers: Vec<DistanceTier>) -> VehicleOption {
    VehicleOption {
        id: 8_123_456_789,
        catalog_ref: "gid://shopify/Product/8123456789".to_string(),
        default_unit_ref: price_tiers.first().map(|t| t.tier_id.clone()),
        name: "Mercedes S-Class".to_string(),
        handle: "mercedes-s-class".to_string(),
        image_url: None,
        category: "Luxury Sedan".to_string(),
        capacity: 4,
        luggage_capacity: 2,
        rating: 4.8,
        review_count: 12,
        base_fare: Decimal::from(50),
        per_km_rate: Decimal::from(2),
        is_featured: false,
        amenities: vec!["Wi-Fi".to_string()],
        currency_code: "AED".to_string(),
        price_tiers,
    }
}

/// The `[{0,50,100},{51,100,180}]` vehicle used throughout the transfer tests.
pub(crate) fn tiered_sedan() -> VehicleOption {
    vehicle(vec![
        distance_tier("101", 0, 50, 100),
        distance_tier("102", 51, 100, 180),
    ])
}

pub(crate) fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 11, d).expect("valid date")
}

pub(crate) fn at(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
}

pub(crate) fn transfer(distance_km: Option<f64>, direction: TripDirection) -> TransferTrip {
    let (return_date, return_time) = match direction {
        TripDirection::OneWay => (None, None),
        TripDirection::RoundTrip => (Some(day(5)), Some(at(18, 30))),
    };
    TransferTrip {
        origin: Place::new(
            "Dubai International Airport",
            Some(Coordinates {
                lat: 25.2532,
                lng: 55.3657,
            }),
        ),
        destination: Place::new(
            "Atlantis The Palm",
            Some(Coordinates {
                lat: 25.1304,
                lng: 55.1171,
            }),
        ),
        distance_km,
        eta_label: Some("45 mins".to_string()),
        direction,
        pickup_date: day(2),
        pickup_time: at(9, 0),
        return_date,
        return_time,
        passenger_count: 2,
    }
}

pub(crate) fn rental(dropoff_day: u32, dropoff_h: u32, dropoff_m: u32) -> RentalTrip {
    RentalTrip {
        pickup: Place::new("Downtown Dubai", None),
        pickup_date: day(1),
        pickup_time: at(9, 0),
        dropoff_date: day(dropoff_day),
        dropoff_time: at(dropoff_h, dropoff_m),
        passenger_count: 3,
    }
}
