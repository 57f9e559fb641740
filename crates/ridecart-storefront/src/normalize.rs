//! Normalization from raw storefront products to [`VehicleOption`].
//!
//! Title parsing is delegated to [`crate::parse`] and typed metafield access
//! to [`crate::metafields`]; this module applies the catalog defaults.
//! Normalization never fails: malformed pieces degrade to defaults and are
//! logged.

use std::str::FromStr;

use ridecart_core::{DistanceTier, VehicleOption};
use rust_decimal::Decimal;

use crate::metafields::{keys, MetafieldStore};
use crate::parse::{classify_unit_title, parse_numeric_id, parse_tier_range};
use crate::types::{ProductsData, RawProduct, RawVariant};

pub const DEFAULT_CATEGORY: &str = "Standard";
pub const DEFAULT_CAPACITY: u32 = 4;
pub const DEFAULT_LUGGAGE_CAPACITY: u32 = 2;
pub const DEFAULT_RATING: f64 = 4.5;
pub const DEFAULT_CURRENCY: &str = "AED";
pub const DEFAULT_AMENITIES: [&str; 2] = ["Professional Chauffeur", "Complimentary Water"];

/// Flat base fare used when neither the metafield nor any unit supplies one.
pub const DEFAULT_BASE_FARE: Decimal = Decimal::from_parts(50, 0, 0, false, 0);
pub const DEFAULT_PER_KM_RATE: Decimal = Decimal::TWO;

/// Normalizes a raw [`RawProduct`] into a [`VehicleOption`].
///
/// Units keep their catalog order. `base_fare` comes from the `base_fare`
/// metafield, else the first unit's price, else [`DEFAULT_BASE_FARE`].
#[must_use]
pub fn normalize_product(product: RawProduct) -> VehicleOption {
    let meta = MetafieldStore::from_slots(&product.metafields);

    let price_tiers: Vec<DistanceTier> = product
        .variants
        .edges
        .iter()
        .map(|edge| normalize_unit(&edge.node, &product.id))
        .collect();

    let currency_code = product
        .variants
        .edges
        .first()
        .and_then(|edge| edge.node.price.currency_code.clone())
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

    let category = meta
        .text(keys::CATEGORY)
        .map(str::to_owned)
        .or_else(|| {
            product
                .product_type
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_owned)
        })
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

    let base_fare = meta
        .decimal(keys::BASE_FARE)
        .or_else(|| price_tiers.first().map(|t| t.unit_price))
        .unwrap_or(DEFAULT_BASE_FARE);

    let amenities = meta.list(keys::AMENITIES).unwrap_or_else(|| {
        DEFAULT_AMENITIES
            .iter()
            .map(|a| (*a).to_string())
            .collect()
    });

    VehicleOption {
        id: parse_numeric_id(&product.id),
        default_unit_ref: price_tiers.first().map(|t| t.tier_id.clone()),
        catalog_ref: product.id,
        name: product.title,
        handle: product.handle,
        image_url: product.featured_image.map(|img| img.url),
        category,
        capacity: meta.integer(keys::CAPACITY).unwrap_or(DEFAULT_CAPACITY),
        luggage_capacity: meta
            .integer(keys::LUGGAGE_CAPACITY)
            .unwrap_or(DEFAULT_LUGGAGE_CAPACITY),
        rating: meta.float(keys::RATING).unwrap_or(DEFAULT_RATING),
        review_count: meta.integer(keys::REVIEW_COUNT).unwrap_or(0),
        base_fare,
        per_km_rate: meta
            .decimal(keys::PRICE_PER_KM)
            .unwrap_or(DEFAULT_PER_KM_RATE),
        is_featured: meta.flag(keys::FEATURED),
        amenities,
        currency_code,
        price_tiers,
    }
}

/// Normalizes every product in a products query response, in order.
#[must_use]
pub fn normalize_catalog(data: ProductsData) -> Vec<VehicleOption> {
    data.products
        .edges
        .into_iter()
        .map(|edge| normalize_product(edge.node))
        .collect()
}

fn normalize_unit(unit: &RawVariant, product_id: &str) -> DistanceTier {
    let (range_min, range_max) = parse_tier_range(&unit.title);
    let unit_price = Decimal::from_str(unit.price.amount.trim()).unwrap_or_else(|e| {
        tracing::warn!(
            product_id,
            unit_id = %unit.id,
            amount = %unit.price.amount,
            error = %e,
            "unparseable unit price; treating as zero"
        );
        Decimal::ZERO
    });

    DistanceTier {
        tier_id: unit.id.clone(),
        label: unit.title.clone(),
        unit_price,
        range_min,
        range_max,
        kind: classify_unit_title(&unit.title),
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
