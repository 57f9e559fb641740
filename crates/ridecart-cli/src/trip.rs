//! Trip arguments shared by `quote` and `book`.
//!
//! Distance and duration come from the caller's routing service; the CLI
//! only forwards them.

use chrono::{NaiveDate, NaiveTime};
use clap::{Args, Subcommand};
use ridecart_core::{Place, RentalTrip, TransferTrip, TripDirection, TripRequest};

/// Trip shapes accepted by `quote`.
#[derive(Debug, Subcommand)]
pub enum TripCommands {
    /// Point-to-point transfer priced by distance
    Transfer(TransferArgs),
    /// Chauffeured rental priced by the day
    Rental(RentalArgs),
}

impl TripCommands {
    #[must_use]
    pub fn into_request(self) -> TripRequest {
        match self {
            TripCommands::Transfer(args) => args.into_request(),
            TripCommands::Rental(args) => args.into_request(),
        }
    }
}

#[derive(Debug, Args)]
pub struct TransferArgs {
    /// Pickup address or landmark
    #[arg(long)]
    pub from: String,
    /// Drop-off address or landmark
    #[arg(long)]
    pub to: String,
    /// One-way route distance in kilometres
    #[arg(long)]
    pub distance_km: Option<f64>,
    /// One-way route duration label, e.g. "45 mins"
    #[arg(long)]
    pub eta: Option<String>,
    /// Pickup date (YYYY-MM-DD)
    #[arg(long)]
    pub date: NaiveDate,
    /// Pickup time (HH:MM)
    #[arg(long, value_parser = parse_time)]
    pub time: NaiveTime,
    /// Book the return leg as well; implied by --return-date
    #[arg(long)]
    pub round_trip: bool,
    #[arg(long)]
    pub return_date: Option<NaiveDate>,
    #[arg(long, value_parser = parse_time)]
    pub return_time: Option<NaiveTime>,
    #[arg(long, default_value = "1")]
    pub passengers: u32,
}

impl TransferArgs {
    #[must_use]
    pub fn into_request(self) -> TripRequest {
        let direction = if self.round_trip || self.return_date.is_some() {
            TripDirection::RoundTrip
        } else {
            TripDirection::OneWay
        };
        TripRequest::Transfer(TransferTrip {
            origin: Place::new(self.from, None),
            destination: Place::new(self.to, None),
            distance_km: self.distance_km,
            eta_label: self.eta,
            direction,
            pickup_date: self.date,
            pickup_time: self.time,
            return_date: self.return_date,
            return_time: self.return_time,
            passenger_count: self.passengers,
        })
    }
}

#[derive(Debug, Args)]
pub struct RentalArgs {
    /// Where the chauffeur collects the party
    #[arg(long)]
    pub pickup: String,
    /// Pickup date (YYYY-MM-DD)
    #[arg(long)]
    pub pickup_date: NaiveDate,
    /// Pickup time (HH:MM)
    #[arg(long, value_parser = parse_time)]
    pub pickup_time: NaiveTime,
    /// Drop-off date (YYYY-MM-DD)
    #[arg(long)]
    pub dropoff_date: NaiveDate,
    /// Drop-off time (HH:MM)
    #[arg(long, value_parser = parse_time)]
    pub dropoff_time: NaiveTime,
    #[arg(long, default_value = "1")]
    pub passengers: u32,
}

impl RentalArgs {
    #[must_use]
    pub fn into_request(self) -> TripRequest {
        TripRequest::DailyRental(RentalTrip {
            pickup: Place::new(self.pickup, None),
            pickup_date: self.pickup_date,
            pickup_time: self.pickup_time,
            dropoff_date: self.dropoff_date,
            dropoff_time: self.dropoff_time,
            passenger_count: self.passengers,
        })
    }
}

/// Accepts `HH:MM` or `HH:MM:SS`.
fn parse_time(raw: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .map_err(|e| format!("expected HH:MM, got \"{raw}\": {e}"))
}
