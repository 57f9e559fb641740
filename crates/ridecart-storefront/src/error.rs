use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("rate limited by {domain} (retry after {retry_after_secs}s)")]
    RateLimited {
        domain: String,
        retry_after_secs: u64,
    },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("catalog fetch failed: {0}")]
    CatalogFetch(String),

    #[error("checkout rejected: {0}")]
    Checkout(String),

    #[error("checkout succeeded without a checkout URL")]
    MissingCheckoutUrl,

    #[error("invalid storefront URL \"{store_url}\": {reason}")]
    InvalidStoreUrl { store_url: String, reason: String },
}

/// Failure of a search or booking run through a catalog session.
#[derive(Debug, Error)]
pub enum BookingError {
    #[error(transparent)]
    Validation(#[from] ridecart_core::ValidationError),

    #[error(transparent)]
    Compose(#[from] ridecart_pricing::ComposeError),

    #[error(transparent)]
    Storefront(#[from] StorefrontError),

    #[error("vehicle {0} is not in the catalog")]
    UnknownVehicle(u64),
}
