//! Routing hierarchy errors.

use super::error_code::{self, HarvestErrorCode};

/// Errors raised by the routing hierarchy and its builder.
#[derive(Debug, thiserror::Error)]
pub enum RoutingError {
    /// The lot lacks a metric a quality gate reads. Never defaulted.
    #[error("lot {lot_id} has no '{metric}' metric")]
    MissingMetric { lot_id: String, metric: String },

    /// The identifier does not name a terminal node of the hierarchy.
    #[error("unknown terminal node: {node_id}")]
    UnknownNode { node_id: String },

    #[error("handoff {handoff_id} was already routed to {destination}")]
    AlreadyRouted {
        handoff_id: String,
        destination: String,
    },

    #[error("malformed routing hierarchy: {details}")]
    MalformedHierarchy { details: String },
}

impl HarvestErrorCode for RoutingError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingMetric { .. } => error_code::MISSING_METRIC,
            Self::UnknownNode { .. } => error_code::UNKNOWN_NODE,
            Self::AlreadyRouted { .. } => error_code::ALREADY_ROUTED,
            Self::MalformedHierarchy { .. } => error_code::MALFORMED_HIERARCHY,
        }
    }
}
