//! # harvest-engine
//!
//! The surface a front end drives: register a harvest, pull lots off terminal
//! queues, record onward transfers, and read back custody histories.

pub mod engine;
pub mod requests;

pub use engine::SupplyChainEngine;
pub use requests::{HarvestIntake, RegisteredLot, TransferRequest};
