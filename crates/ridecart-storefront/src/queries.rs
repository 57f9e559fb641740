//! GraphQL documents sent to the storefront.

/// Products with their units, image and the fixed metafield identifiers in
/// [`crate::metafields::keys::ALL`] order.
pub const PRODUCTS_QUERY: &str = r#"
query Vehicles($first: Int!) {
  products(first: $first) {
    edges {
      node {
        id
        title
        handle
        productType
        featuredImage { url }
        variants(first: 20) {
          edges {
            node {
              id
              title
              price { amount currencyCode }
            }
          }
        }
        metafields(identifiers: [
          { namespace: "custom", key: "category" }
          { namespace: "custom", key: "capacity" }
          { namespace: "custom", key: "luggage_capacity" }
          { namespace: "custom", key: "rating" }
          { namespace: "custom", key: "review_count" }
          { namespace: "custom", key: "base_fare" }
          { namespace: "custom", key: "price_per_km" }
          { namespace: "custom", key: "amenities" }
          { namespace: "custom", key: "featured" }
        ]) {
          key
          value
          type
        }
      }
    }
  }
}
"#;

pub const CART_CREATE_MUTATION: &str = r"
mutation CartCreate($input: CartInput!) {
  cartCreate(input: $input) {
    cart {
      id
      checkoutUrl
    }
    userErrors {
      field
      message
    }
  }
}
";
