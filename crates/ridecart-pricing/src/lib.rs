//! Fare resolution and cart composition for transfers and daily rentals.
//!
//! Everything in this crate is a pure transform over values from
//! [`ridecart_core`]: no I/O, no shared state.

pub mod compose;
pub mod fare;
pub mod money;
pub mod note;
pub mod resolver;
pub mod search;

pub use compose::{compose_checkout, Attribute, CheckoutLineItem, CheckoutPlan, ComposeError};
pub use fare::{calculate_fare, classify_rental, FareBasis, FareQuote, RentalPlan};
pub use resolver::resolve_tier;
pub use search::{search_vehicles, VehicleQuote};

#[cfg(test)]
mod test_support;
