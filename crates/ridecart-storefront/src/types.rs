//! Storefront GraphQL wire types.
//!
//! ## Observed shape of the products query
//!
//! ### Connections
//! Lists come back as Relay connections: `{"edges": [{"node": {...}}]}`.
//! An empty catalog is `{"edges": []}`, never `null`.
//!
//! ### `metafields`
//! The query asks for a fixed list of identifiers. The response array has
//! one slot per requested identifier, in request order, and a slot is
//! `null` when the product has no value for that key. We model each slot as
//! `Option<RawMetafield>`.
//!
//! ### `price.amount`
//! A decimal **string**, e.g. `"180.0"`. Parsed to `Decimal` during
//! normalization; unparseable amounts fall back to zero.
//!
//! ### `productType`
//! Always present but frequently the empty string. Treated as absent.
//!
//! ### `errors`
//! Top-level GraphQL errors arrive with HTTP 200. `data` may be `null` or
//! partially populated alongside them.

use serde::{Deserialize, Serialize};

/// Top-level GraphQL envelope.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,

    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// Generic Relay connection.
#[derive(Debug, Clone, Deserialize)]
pub struct Connection<T> {
    #[serde(default = "Vec::new")]
    pub edges: Vec<Edge<T>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Edge<T> {
    pub node: T,
}

/// `data` of the products query.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductsData {
    pub products: Connection<RawProduct>,
}

/// A single vehicle product as returned by the storefront.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProduct {
    /// Global id, e.g. `"gid://shopify/Product/8123456789"`.
    pub id: String,

    /// Vehicle model name, e.g. `"Mercedes S-Class"`.
    pub title: String,

    /// URL slug for the product page.
    #[serde(default)]
    pub handle: String,

    /// Fallback vehicle category. Empty string when unset.
    #[serde(default)]
    pub product_type: Option<String>,

    #[serde(default)]
    pub featured_image: Option<RawImage>,

    /// Purchasable units: distance brackets and rental periods.
    pub variants: Connection<RawVariant>,

    /// One slot per requested identifier; `null` when unset.
    #[serde(default)]
    pub metafields: Vec<Option<RawMetafield>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawImage {
    pub url: String,
}

/// A purchasable unit of a [`RawProduct`].
#[derive(Debug, Clone, Deserialize)]
pub struct RawVariant {
    /// Global id, e.g. `"gid://shopify/ProductVariant/44012345"`.
    pub id: String,

    /// Free-text title such as `"0-50 km"` or `"Daily Rental - Full Day"`.
    pub title: String,

    pub price: RawMoney,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMoney {
    /// Decimal string, e.g. `"180.0"`.
    pub amount: String,

    #[serde(default)]
    pub currency_code: Option<String>,
}

/// A typed key/value pair attached to a product.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMetafield {
    pub key: String,
    pub value: String,

    /// Declared type, e.g. `"number_integer"`, `"boolean"`, `"json"`.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

// ---------------------------------------------------------------------------
// cartCreate
// ---------------------------------------------------------------------------

/// `data` of the `cartCreate` mutation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartCreateData {
    pub cart_create: Option<CartCreatePayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartCreatePayload {
    #[serde(default)]
    pub cart: Option<RawCart>,

    #[serde(default)]
    pub user_errors: Vec<CartUserError>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCart {
    pub id: String,

    #[serde(default)]
    pub checkout_url: Option<String>,
}

/// A validation error reported by the mutation; `field` is the input path.
#[derive(Debug, Deserialize)]
pub struct CartUserError {
    #[serde(default)]
    pub field: Option<Vec<String>>,
    pub message: String,
}

/// Request body sent to the GraphQL endpoint.
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a, V> {
    pub query: &'a str,
    pub variables: V,
}

#[derive(Debug, Serialize)]
pub struct ProductsVariables {
    pub first: u32,
}

#[derive(Debug, Serialize)]
pub struct CartCreateVariables {
    pub input: CartInput,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartInput {
    pub lines: Vec<CartLineInput>,
    pub attributes: Vec<AttributeInput>,
    pub note: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_identity: Option<BuyerIdentityInput>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineInput {
    pub merchandise_id: String,
    pub quantity: u32,
    pub attributes: Vec<AttributeInput>,
}

#[derive(Debug, Serialize)]
pub struct AttributeInput {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyerIdentityInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub country_code: String,
}
