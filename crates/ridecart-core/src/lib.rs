pub mod app_config;
pub mod config;
pub mod fees;
pub mod trip;
pub mod vehicles;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use fees::{load_fee_table, FeeEntry, FeeTable};
pub use trip::{
    Coordinates, Place, RentalTrip, TransferTrip, TripDirection, TripRequest, ValidationError,
};
pub use vehicles::{DistanceTier, RentalKind, UnitKind, VehicleOption};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read fee table {path}: {source}")]
    FeesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse fee table: {0}")]
    FeesFileParse(#[from] serde_yaml::Error),

    #[error("fee table validation failed: {0}")]
    Validation(String),
}
