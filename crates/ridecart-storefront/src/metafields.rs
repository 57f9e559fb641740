//! Typed access to the metafields attached to a product.

use std::collections::HashMap;
use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::types::RawMetafield;

/// Metafield keys requested for every vehicle, all in the `custom` namespace.
pub mod keys {
    pub const CATEGORY: &str = "category";
    pub const CAPACITY: &str = "capacity";
    pub const LUGGAGE_CAPACITY: &str = "luggage_capacity";
    pub const RATING: &str = "rating";
    pub const REVIEW_COUNT: &str = "review_count";
    pub const BASE_FARE: &str = "base_fare";
    pub const PRICE_PER_KM: &str = "price_per_km";
    pub const AMENITIES: &str = "amenities";
    pub const FEATURED: &str = "featured";

    /// Request order of the identifiers sent with the products query.
    pub const ALL: [&str; 9] = [
        CATEGORY,
        CAPACITY,
        LUGGAGE_CAPACITY,
        RATING,
        REVIEW_COUNT,
        BASE_FARE,
        PRICE_PER_KM,
        AMENITIES,
        FEATURED,
    ];
}

/// Metafields of one product keyed by name. `null` slots are skipped and the
/// first entry wins when a key repeats.
#[derive(Debug, Default)]
pub struct MetafieldStore {
    entries: HashMap<String, RawMetafield>,
}

impl MetafieldStore {
    #[must_use]
    pub fn from_slots(slots: &[Option<RawMetafield>]) -> Self {
        let mut entries = HashMap::new();
        for field in slots.iter().flatten() {
            entries
                .entry(field.key.clone())
                .or_insert_with(|| field.clone());
        }
        Self { entries }
    }

    /// Trimmed value, `None` when missing or blank.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .map(|f| f.value.trim())
            .filter(|v| !v.is_empty())
    }

    /// Whole number. A decimal-typed entry is rounded.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn integer(&self, key: &str) -> Option<u32> {
        let raw = self.text(key)?;
        if let Ok(n) = raw.parse::<u32>() {
            return Some(n);
        }
        match raw.parse::<f64>() {
            Ok(f) if f.is_finite() && f >= 0.0 && f <= f64::from(u32::MAX) => {
                Some(f.round() as u32)
            }
            _ => {
                self.warn_unparseable(key, raw);
                None
            }
        }
    }

    #[must_use]
    pub fn float(&self, key: &str) -> Option<f64> {
        let raw = self.text(key)?;
        match raw.parse::<f64>() {
            Ok(f) if f.is_finite() => Some(f),
            _ => {
                self.warn_unparseable(key, raw);
                None
            }
        }
    }

    /// Money-like value. Accepts scientific notation via `f64` as a fallback.
    #[must_use]
    pub fn decimal(&self, key: &str) -> Option<Decimal> {
        let raw = self.text(key)?;
        let parsed = Decimal::from_str(raw).ok().or_else(|| {
            raw.parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .and_then(Decimal::from_f64)
        });
        if parsed.is_none() {
            self.warn_unparseable(key, raw);
        }
        parsed
    }

    /// `true` only for the literal string `"true"`.
    #[must_use]
    pub fn flag(&self, key: &str) -> bool {
        self.text(key) == Some("true")
    }

    /// JSON array of strings; `None` when missing or not such an array.
    #[must_use]
    pub fn list(&self, key: &str) -> Option<Vec<String>> {
        let raw = self.text(key)?;
        match serde_json::from_str::<Vec<String>>(raw) {
            Ok(items) => Some(items),
            Err(_) => {
                self.warn_unparseable(key, raw);
                None
            }
        }
    }

    fn warn_unparseable(&self, key: &str, raw: &str) {
        let declared = self
            .entries
            .get(key)
            .and_then(|f| f.kind.as_deref())
            .unwrap_or("unknown");
        tracing::warn!(key, value = raw, declared, "unparseable metafield; using default");
    }
}
