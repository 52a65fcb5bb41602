//! Handoff records: the provenance chain's unit of history.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{HandoffId, Lot};

/// The role of the party handling a lot at a handoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandlerRole {
    Producer,
    Intermediary,
    Processor,
    Retailer,
    Exporter,
}

impl HandlerRole {
    pub fn name(self) -> &'static str {
        match self {
            Self::Producer => "Producer",
            Self::Intermediary => "Intermediary",
            Self::Processor => "Processor",
            Self::Retailer => "Retailer",
            Self::Exporter => "Exporter",
        }
    }
}

impl fmt::Display for HandlerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where an intermediary sends a lot after picking it up from a terminal queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnwardDestination {
    Manufacturer,
    Retailer,
    Export,
}

impl OnwardDestination {
    /// Action text recorded on the successor handoff.
    pub fn action(self) -> &'static str {
        match self {
            Self::Manufacturer => "Route to Manufacturer",
            Self::Retailer => "Route to Retailer",
            Self::Export => "Route to Export",
        }
    }
}

/// A single custody event for a lot.
///
/// The chain owns the canonical record; terminal queues refer to it by `id`.
/// After creation only two things change: routing annotates `action` and sets
/// `destination` once, and the chain sets `next` once when a successor arrives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandoffRecord {
    pub id: HandoffId,
    pub created_at: DateTime<Utc>,
    pub handler_id: String,
    pub handler_role: HandlerRole,
    pub location: String,
    /// Free-text action. Routing appends its decision trail here.
    pub action: String,
    /// Where the lot goes next. Empty until routed.
    pub destination: String,
    /// Snapshot of the lot at this handoff.
    pub lot: Lot,
    /// Chain-assigned; never taken from input.
    #[serde(skip_deserializing)]
    pub(crate) previous: Option<HandoffId>,
    #[serde(skip_deserializing)]
    pub(crate) next: Option<HandoffId>,
}

impl HandoffRecord {
    pub fn new(
        id: impl Into<HandoffId>,
        created_at: DateTime<Utc>,
        handler_id: impl Into<String>,
        handler_role: HandlerRole,
        location: impl Into<String>,
        action: impl Into<String>,
        lot: Lot,
    ) -> Self {
        Self {
            id: id.into(),
            created_at,
            handler_id: handler_id.into(),
            handler_role,
            location: location.into(),
            action: action.into(),
            destination: String::new(),
            lot,
            previous: None,
            next: None,
        }
    }

    /// The handoff this one follows, `None` for the origin event.
    pub fn previous(&self) -> Option<&HandoffId> {
        self.previous.as_ref()
    }

    /// The handoff created from this one, `None` until a successor exists.
    pub fn next(&self) -> Option<&HandoffId> {
        self.next.as_ref()
    }

    pub fn is_origin(&self) -> bool {
        self.previous.is_none()
    }

    pub fn is_routed(&self) -> bool {
        !self.destination.is_empty()
    }

    /// Append a routing trail and set the destination in one step.
    pub fn record_routing(&mut self, trail: &str, destination: String) {
        self.action.push_str(trail);
        self.destination = destination;
    }

    /// Drop any links this record carries, then wire it after `predecessor`
    /// when one is given. This is the only way links are written, and the
    /// chain calls it on every append, so a record cloned from a registered
    /// one never keeps its source's place in a history.
    pub fn link_after(&mut self, predecessor: Option<&mut HandoffRecord>) {
        self.previous = None;
        self.next = None;
        if let Some(predecessor) = predecessor {
            predecessor.next = Some(self.id.clone());
            self.previous = Some(predecessor.id.clone());
        }
    }
}
