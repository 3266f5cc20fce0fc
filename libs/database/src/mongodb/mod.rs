//! MongoDB connector and helpers.

mod config;
mod connector;
mod health;

pub use config::MongoConfig;
pub use connector::{
    MongoError, connect, connect_from_config, connect_from_config_with_retry, connect_with_retry,
};
pub use health::{HealthStatus, check_health, check_health_detailed};

// Re-export driver types so domain crates do not need a direct dependency
// on the driver version.
pub use mongodb::{Client, Collection, Database};
