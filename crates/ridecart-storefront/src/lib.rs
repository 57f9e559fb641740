//! Storefront integration: catalog normalization, the GraphQL gateway and
//! the booking session built on top of it.

pub mod client;
pub mod error;
pub mod gateway;
pub mod metafields;
pub mod normalize;
pub mod parse;
pub mod queries;
mod rate_limit;
pub mod session;
pub mod types;

pub use client::{BuyerIdentity, StorefrontClient};
pub use error::{BookingError, StorefrontError};
pub use gateway::Storefront;
pub use metafields::MetafieldStore;
pub use normalize::{normalize_catalog, normalize_product};
pub use session::{Booking, CatalogSession};
pub use types::{ProductsData, RawProduct, RawVariant};
