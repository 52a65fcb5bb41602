//! # harvest-provenance
//!
//! The append-only provenance chain. Owns every handoff record for the life of
//! the process and rebuilds a lot's custody history from origin to its most
//! recent handoff.

pub mod chain;

pub use chain::ProvenanceChain;
