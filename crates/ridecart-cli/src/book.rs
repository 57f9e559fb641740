//! Booking handler: compose a cart for one vehicle and print its checkout URL.

use clap::{Args, Subcommand};
use ridecart_pricing::money::format_money;
use ridecart_storefront::{BuyerIdentity, CatalogSession, Storefront};

use crate::trip::{RentalArgs, TransferArgs};

/// Sub-commands available under `book`.
#[derive(Debug, Subcommand)]
pub enum BookCommands {
    /// Book a transfer
    Transfer {
        #[command(flatten)]
        booking: BookingArgs,
        #[command(flatten)]
        trip: TransferArgs,
    },
    /// Book a daily rental
    Rental {
        #[command(flatten)]
        booking: BookingArgs,
        #[command(flatten)]
        trip: RentalArgs,
    },
}

#[derive(Debug, Args)]
pub struct BookingArgs {
    /// Vehicle id as listed by `catalog`
    #[arg(long)]
    pub vehicle: u64,
    /// Buyer email forwarded to the hosted checkout
    #[arg(long)]
    pub email: Option<String>,
}

/// Submit a checkout for the selected vehicle.
///
/// The checkout is sent once; on failure the error is printed and the user
/// re-runs the command.
///
/// # Errors
///
/// Returns an error if the trip is invalid, the vehicle is unknown or too
/// small, or the storefront rejects the cart.
pub(crate) async fn run_book<S: Storefront>(
    session: &mut CatalogSession<S>,
    command: BookCommands,
    country_code: &str,
) -> anyhow::Result<()> {
    let (booking, trip) = match command {
        BookCommands::Transfer { booking, trip } => (booking, trip.into_request()),
        BookCommands::Rental { booking, trip } => (booking, trip.into_request()),
    };
    let buyer = BuyerIdentity {
        email: booking.email,
        country_code: country_code.to_owned(),
    };

    let result = session.checkout(booking.vehicle, &trip, Some(&buyer)).await?;

    println!("{}", result.plan.note);
    println!();
    println!(
        "Was: {}",
        format_money(result.fare.was_price(), &result.fare.currency_code)
    );
    println!("Checkout: {}", result.checkout_url);
    Ok(())
}
