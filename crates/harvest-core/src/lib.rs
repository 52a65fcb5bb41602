//! # harvest-core
//!
//! Foundation crate for harvest provenance and routing.
//! Defines the lot and handoff models, errors, config, identifiers, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod identity;
pub mod models;
pub mod traits;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::HarvestConfig;
pub use errors::{HarvestError, HarvestResult};
pub use identity::IdGenerator;
pub use models::{
    HandlerRole, HandoffId, HandoffRecord, Lot, LotId, LotSummary, NodeId, OnwardDestination,
    Region,
};
pub use traits::{Clock, SystemClock};
