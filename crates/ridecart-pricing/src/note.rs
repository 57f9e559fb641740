//! Human-readable order notes for back-office review.
//!
//! Nothing parses these. Each of the three booking shapes (one-way
//! transfer, round trip, daily rental) restates the vehicle, the itinerary,
//! the fare arithmetic and any fee line.

use ridecart_core::{
    FeeEntry, RentalTrip, TransferTrip, TripDirection, TripRequest, VehicleOption,
};

use crate::fare::FareQuote;
use crate::money::format_money;

const STAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Renders the order note for a composed checkout.
#[must_use]
pub fn order_note(
    vehicle: &VehicleOption,
    trip: &TripRequest,
    fare: &FareQuote,
    fee: Option<&FeeEntry>,
) -> String {
    let mut lines = match trip {
        TripRequest::Transfer(transfer) => {
            let heading = match transfer.direction {
                TripDirection::OneWay => "ONE-WAY TRANSFER BOOKING",
                TripDirection::RoundTrip => "ROUND-TRIP TRANSFER BOOKING",
            };
            let mut lines = vec![heading.to_owned()];
            lines.extend(vehicle_lines(vehicle, transfer.passenger_count));
            lines.extend(transfer_itinerary(transfer));
            lines
        }
        TripRequest::DailyRental(rental) => {
            let plan = fare.rental.map_or("Daily Rental", |p| p.label());
            let mut lines = vec![format!("DAILY RENTAL BOOKING ({plan})")];
            lines.extend(vehicle_lines(vehicle, rental.passenger_count));
            lines.extend(rental_itinerary(rental, fare));
            lines
        }
    };

    lines.push(String::new());
    lines.push(format!("Fare: {}", fare.description));
    if let Some(fee) = fee {
        lines.push(format!(
            "{}: added as a separate cart line for {}",
            fee.label, vehicle.category
        ));
    }
    lines.push(format!(
        "Total fare: {}",
        format_money(fare.amount, &fare.currency_code)
    ));

    lines.join("\n")
}

fn vehicle_lines(vehicle: &VehicleOption, passengers: u32) -> [String; 4] {
    [
        format!("Vehicle: {} ({})", vehicle.name, vehicle.category),
        format!("Assigned vehicle: {}", vehicle.equivalent_vehicle_notice()),
        format!("Passengers: {passengers}"),
        String::new(),
    ]
}

fn transfer_itinerary(trip: &TransferTrip) -> Vec<String> {
    let round_trip = trip.direction == TripDirection::RoundTrip;
    let each_way = if round_trip { " each way" } else { "" };

    let mut lines = vec![
        format!("Pickup: {}", trip.origin.label),
        format!("Drop-off: {}", trip.destination.label),
        match trip.distance_km {
            Some(km) => format!("Distance: {km:.1} km{each_way}"),
            None => "Distance: not calculated".to_owned(),
        },
    ];
    if let Some(eta) = &trip.eta_label {
        lines.push(format!("Duration: {eta}{each_way}"));
    }

    lines.push(format!("Outbound: {}", trip.pickup_at().format(STAMP_FORMAT)));
    if round_trip {
        lines.push(match trip.return_at() {
            Some(at) => format!("Return: {}", at.format(STAMP_FORMAT)),
            None => "Return: not scheduled".to_owned(),
        });
    }
    lines
}

fn rental_itinerary(trip: &RentalTrip, fare: &FareQuote) -> Vec<String> {
    let hours = fare.rental_hours.unwrap_or_else(|| trip.rental_hours());
    vec![
        format!("Pickup location: {}", trip.pickup.label),
        format!("Pickup: {}", trip.pickup_at().format(STAMP_FORMAT)),
        format!("Drop-off: {}", trip.dropoff_at().format(STAMP_FORMAT)),
        format!("Rental hours: {hours:.1}"),
        format!(
            "Days billed: {}",
            fare.number_of_days().unwrap_or(fare.quantity)
        ),
    ]
}

#[cfg(test)]
mod tests {
    use ridecart_core::{TripDirection, TripRequest, UnitKind};

    use super::*;
    use crate::fare::calculate_fare;
    use crate::test_support::{rental, rental_tier, tiered_sedan, transfer, vehicle};

    fn parking() -> FeeEntry {
        FeeEntry {
            category: "Luxury Sedan".to_string(),
            unit_ref: "gid://shopify/ProductVariant/9001".to_string(),
            label: "Parking fee".to_string(),
        }
    }

    #[test]
    fn one_way_note_restates_itinerary_and_arithmetic() {
        let sedan = tiered_sedan();
        let trip = TripRequest::Transfer(transfer(Some(75.0), TripDirection::OneWay));
        let fare = calculate_fare(&sedan, &trip);
        let note = order_note(&sedan, &trip, &fare, Some(&parking()));

        assert!(note.starts_with("ONE-WAY TRANSFER BOOKING"));
        assert!(note.contains("Vehicle: Mercedes S-Class (Luxury Sedan)"));
        assert!(note.contains("or equivalent Luxury Sedan"));
        assert!(note.contains("Pickup: Dubai International Airport"));
        assert!(note.contains("Drop-off: Atlantis The Palm"));
        assert!(note.contains("Distance: 75.0 km\n"));
        assert!(note.contains("Outbound: 2026-11-02 09:00"));
        assert!(note.contains("AED 180.00 x 1 (one way) = AED 180.00"));
        assert!(note.contains("Parking fee: added as a separate cart line"));
        assert!(note.ends_with("Total fare: AED 180.00"));
        assert!(!note.contains("Return:"));
    }

    #[test]
    fn round_trip_note_has_return_leg_and_each_way_distance() {
        let sedan = tiered_sedan();
        let trip = TripRequest::Transfer(transfer(Some(30.0), TripDirection::RoundTrip));
        let fare = calculate_fare(&sedan, &trip);
        let note = order_note(&sedan, &trip, &fare, None);

        assert!(note.starts_with("ROUND-TRIP TRANSFER BOOKING"));
        assert!(note.contains("Distance: 30.0 km each way"));
        assert!(note.contains("Return: 2026-11-05 18:30"));
        assert!(note.contains("AED 100.00 x 2 (round trip) = AED 200.00"));
        assert!(!note.contains("Parking fee"));
    }

    #[test]
    fn rental_note_has_hours_and_days() {
        let sedan = vehicle(vec![rental_tier("21", UnitKind::FullDayRental, 300)]);
        let trip = TripRequest::DailyRental(rental(4, 9, 0));
        let fare = calculate_fare(&sedan, &trip);
        let note = order_note(&sedan, &trip, &fare, None);

        assert!(note.starts_with("DAILY RENTAL BOOKING (Multi-Day)"));
        assert!(note.contains("Pickup location: Downtown Dubai"));
        assert!(note.contains("Drop-off: 2026-11-04 09:00"));
        assert!(note.contains("Rental hours: 72.0"));
        assert!(note.contains("Days billed: 3"));
        assert!(note.contains("AED 300.00 per day x 3 days"));
        assert!(note.ends_with("Total fare: AED 900.00"));
    }

    #[test]
    fn note_sections_are_separated_by_single_blank_lines() {
        let sedan = tiered_sedan();
        let trip = TripRequest::Transfer(transfer(Some(75.0), TripDirection::OneWay));
        let fare = calculate_fare(&sedan, &trip);
        let note = order_note(&sedan, &trip, &fare, None);

        let lines: Vec<&str> = note.lines().collect();
        assert_eq!(lines[1], "Vehicle: Mercedes S-Class (Luxury Sedan)");
        assert_eq!(lines.iter().filter(|l| l.is_empty()).count(), 2);
        assert!(!note.ends_with('\n'));
    }
}
