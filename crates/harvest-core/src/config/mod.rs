//! Configuration system for harvest.
//! TOML-based, read once at startup; every section falls back to compiled defaults.

pub mod defaults;
pub mod harvest_config;
pub mod identity_config;
pub mod observability_config;
pub mod routing_config;

pub use harvest_config::HarvestConfig;
pub use identity_config::{IdStrategy, IdentityConfig};
pub use observability_config::ObservabilityConfig;
pub use routing_config::RoutingConfig;
