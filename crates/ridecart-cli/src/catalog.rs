//! Read-only catalog and quote handlers.

use ridecart_core::TripRequest;
use ridecart_pricing::money::format_money;
use ridecart_storefront::{CatalogSession, Storefront};

/// List every vehicle in the catalog.
///
/// # Errors
///
/// Returns an error if the catalog cannot be fetched.
pub(crate) async fn run_catalog<S: Storefront>(
    session: &mut CatalogSession<S>,
) -> anyhow::Result<()> {
    let vehicles = session.vehicles().await?;
    if vehicles.is_empty() {
        println!("catalog is empty");
        return Ok(());
    }

    println!(
        "{:<14}{:<28}{:<20}{:<7}{:<6}{:<8}UNITS",
        "ID", "VEHICLE", "CATEGORY", "SEATS", "BAGS", "RATING"
    );
    for v in vehicles {
        let marker = if v.is_featured { "*" } else { "" };
        println!(
            "{:<14}{:<28}{:<20}{:<7}{:<6}{:<8.1}{}",
            v.id,
            format!("{}{marker}", v.name),
            v.category,
            v.capacity,
            v.luggage_capacity,
            v.rating,
            v.price_tiers.len()
        );
        for tier in &v.price_tiers {
            println!(
                "{:<14}  {:<26}{}",
                "",
                tier.label,
                format_money(tier.unit_price, &v.currency_code)
            );
        }
    }
    Ok(())
}

/// Price `trip` on every vehicle that fits the party.
///
/// # Errors
///
/// Returns an error if the trip is invalid, no vehicle fits, or the
/// catalog cannot be fetched.
pub(crate) async fn run_quote<S: Storefront>(
    session: &mut CatalogSession<S>,
    trip: &TripRequest,
) -> anyhow::Result<()> {
    let quotes = session.search(trip).await?;

    println!(
        "{:<14}{:<28}{:<20}{:<7}{:<14}WAS",
        "ID", "VEHICLE", "CATEGORY", "SEATS", "FARE"
    );
    for q in &quotes {
        let currency = &q.fare.currency_code;
        println!(
            "{:<14}{:<28}{:<20}{:<7}{:<14}{}",
            q.vehicle.id,
            q.vehicle.name,
            q.vehicle.category,
            q.vehicle.capacity,
            format_money(q.fare.amount, currency),
            format_money(q.fare.was_price(), currency)
        );
        println!("{:<14}  {}", "", q.fare.description);
    }
    Ok(())
}
