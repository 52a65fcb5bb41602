//! The harvested lot, embedded by value in every handoff that concerns it.
//!
//! # Examples
//!
//! ```
//! use harvest_core::models::{Lot, Region};
//!
//! let lot = Lot::new("LOT1001", "Wheat", Region::North)
//!     .with_metric("freshness", 9.0)
//!     .with_certification("Organic");
//! assert_eq!(lot.metric("freshness"), Some(9.0));
//! assert!(lot.is_certified());
//! ```

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{LotId, Region};

/// One harvested batch. Immutable once handed to the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lot {
    pub id: LotId,
    /// Category label, e.g. "Wheat" or "Tomato".
    pub category: String,
    /// Quantity in kilograms.
    pub quantity: f64,
    pub harvested_at: DateTime<Utc>,
    /// Metric name → score on a 0–10 scale (e.g. "freshness").
    pub metrics: BTreeMap<String, f64>,
    pub certifications: BTreeSet<String>,
    /// Identifier of the originating party.
    pub producer_id: String,
    /// Where the lot was grown.
    pub origin: String,
    pub region: Region,
}

impl Lot {
    /// Create a lot with no metrics, certifications, or quantity.
    /// Harvest time defaults to now; builders below fill in the rest.
    pub fn new(id: impl Into<LotId>, category: impl Into<String>, region: Region) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            quantity: 0.0,
            harvested_at: Utc::now(),
            metrics: BTreeMap::new(),
            certifications: BTreeSet::new(),
            producer_id: String::new(),
            origin: String::new(),
            region,
        }
    }

    pub fn with_quantity(mut self, quantity: f64) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_metric(mut self, name: impl Into<String>, score: f64) -> Self {
        self.metrics.insert(name.into(), score);
        self
    }

    pub fn with_certification(mut self, label: impl Into<String>) -> Self {
        self.certifications.insert(label.into());
        self
    }

    pub fn with_producer(mut self, producer_id: impl Into<String>, origin: impl Into<String>) -> Self {
        self.producer_id = producer_id.into();
        self.origin = origin.into();
        self
    }

    pub fn harvested_at(mut self, at: DateTime<Utc>) -> Self {
        self.harvested_at = at;
        self
    }

    /// Score of a named metric, if the lot carries it.
    pub fn metric(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).copied()
    }

    pub fn is_certified(&self) -> bool {
        !self.certifications.is_empty()
    }
}
