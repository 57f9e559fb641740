use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What a purchasable unit sells, derived from its title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitKind {
    /// A distance bracket for transfers, e.g. `"0-50 km"`.
    Distance,
    HalfDayRental,
    FullDayRental,
}

/// The two rental units a vehicle can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RentalKind {
    HalfDay,
    FullDay,
}

impl RentalKind {
    #[must_use]
    pub fn unit_kind(self) -> UnitKind {
        match self {
            RentalKind::HalfDay => UnitKind::HalfDayRental,
            RentalKind::FullDay => UnitKind::FullDayRental,
        }
    }
}

/// A bookable vehicle, normalized from the storefront catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleOption {
    /// Trailing numeric segment of the storefront global id; `0` when absent.
    pub id: u64,
    /// Product global id, e.g. `"gid://shopify/Product/8123456789"`.
    pub catalog_ref: String,
    /// Global id of the product's first purchasable unit.
    pub default_unit_ref: Option<String>,
    pub name: String,
    pub handle: String,
    pub image_url: Option<String>,
    /// Free-text vehicle class, e.g. `"Luxury Sedan"`.
    pub category: String,
    pub capacity: u32,
    pub luggage_capacity: u32,
    pub rating: f64,
    pub review_count: u32,
    /// Linear-pricing fallback used when no distance tier applies.
    pub base_fare: Decimal,
    pub per_km_rate: Decimal,
    pub is_featured: bool,
    pub amenities: Vec<String>,
    /// ISO 4217 code of the unit prices, e.g. `"AED"`.
    pub currency_code: String,
    /// Every purchasable unit, in catalog order.
    pub price_tiers: Vec<DistanceTier>,
}

impl VehicleOption {
    /// Units that price transfers by distance, in catalog order.
    #[must_use]
    pub fn distance_tiers(&self) -> Vec<DistanceTier> {
        self.price_tiers
            .iter()
            .filter(|t| t.kind == UnitKind::Distance)
            .cloned()
            .collect()
    }

    /// First unit of the given rental kind, if the catalog carries one.
    #[must_use]
    pub fn rental_tier(&self, kind: RentalKind) -> Option<&DistanceTier> {
        let wanted = kind.unit_kind();
        self.price_tiers.iter().find(|t| t.kind == wanted)
    }

    /// `true` when the vehicle can carry `passengers`.
    #[must_use]
    pub fn seats(&self, passengers: u32) -> bool {
        self.capacity >= passengers
    }

    /// Disclaimer shown next to the vehicle: the exact model is not guaranteed.
    #[must_use]
    pub fn equivalent_vehicle_notice(&self) -> String {
        format!("{} or equivalent {}", self.name, self.category)
    }
}

/// One purchasable unit of a [`VehicleOption`].
///
/// `range_min..=range_max` is only meaningful for [`UnitKind::Distance`]
/// units; rental units carry the `{0, 50}` default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceTier {
    /// Global id of the unit, sent as the cart line's merchandise.
    pub tier_id: String,
    /// Unit title as merchandised, e.g. `"51-100 km"`.
    pub label: String,
    pub unit_price: Decimal,
    pub range_min: u32,
    pub range_max: u32,
    pub kind: UnitKind,
}

impl DistanceTier {
    /// `true` when `distance_km` falls inside the inclusive range.
    #[must_use]
    pub fn contains(&self, distance_km: f64) -> bool {
        f64::from(self.range_min) <= distance_km && distance_km <= f64::from(self.range_max)
    }
}
