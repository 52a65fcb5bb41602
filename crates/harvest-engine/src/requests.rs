//! Inputs and outputs of engine operations.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use harvest_core::models::{
    HandlerRole, HandoffId, Lot, LotId, NodeId, OnwardDestination, Region,
};

/// Field values for a new harvest. Identifier and harvest time are assigned
/// by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarvestIntake {
    pub producer_id: String,
    /// Where the lot was grown.
    pub origin: String,
    pub category: String,
    pub region: Region,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub metrics: BTreeMap<String, f64>,
    #[serde(default)]
    pub certifications: Vec<String>,
}

impl HarvestIntake {
    pub fn new(
        producer_id: impl Into<String>,
        origin: impl Into<String>,
        category: impl Into<String>,
        region: Region,
    ) -> Self {
        Self {
            producer_id: producer_id.into(),
            origin: origin.into(),
            category: category.into(),
            region,
            quantity: 0.0,
            metrics: BTreeMap::new(),
            certifications: Vec::new(),
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
        self.certifications.push(label.into());
        self
    }

    pub(crate) fn into_lot(self, id: LotId, harvested_at: DateTime<Utc>) -> Lot {
        let mut lot = Lot::new(id, self.category, self.region)
            .with_quantity(self.quantity)
            .with_producer(self.producer_id, self.origin)
            .harvested_at(harvested_at);
        for (name, score) in self.metrics {
            lot = lot.with_metric(name, score);
        }
        for label in self.certifications {
            lot = lot.with_certification(label);
        }
        lot
    }
}

/// An intermediary taking custody of a lot and sending it onward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub handler_id: String,
    pub location: String,
    pub destination: OnwardDestination,
    #[serde(default = "default_role")]
    pub role: HandlerRole,
}

fn default_role() -> HandlerRole {
    HandlerRole::Intermediary
}

impl TransferRequest {
    pub fn new(
        handler_id: impl Into<String>,
        location: impl Into<String>,
        destination: OnwardDestination,
    ) -> Self {
        Self {
            handler_id: handler_id.into(),
            location: location.into(),
            destination,
            role: default_role(),
        }
    }

    pub fn with_role(mut self, role: HandlerRole) -> Self {
        self.role = role;
        self
    }
}

/// What `register_harvest` produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisteredLot {
    pub lot: Lot,
    /// The origin handoff.
    pub handoff_id: HandoffId,
    /// Terminal the origin handoff was queued at.
    pub destination: NodeId,
}
