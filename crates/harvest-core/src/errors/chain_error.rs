//! Provenance chain errors.

use super::error_code::{self, HarvestErrorCode};

/// Errors raised by the provenance chain and by lookups against it.
///
/// `append` raises every variant except `UnregisteredHandoff` before the chain is touched.
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    #[error("predecessor {predecessor_id} is not registered in the chain")]
    InvalidPredecessor { predecessor_id: String },

    #[error("handoff {handoff_id} is already registered")]
    DuplicateHandoff { handoff_id: String },

    #[error("predecessor {predecessor_id} already has successor {successor_id}")]
    SuccessorAlreadyLinked {
        predecessor_id: String,
        successor_id: String,
    },

    /// A handoff id held elsewhere (e.g. a terminal queue) has no record in the chain.
    #[error("handoff {handoff_id} is not registered in the chain")]
    UnregisteredHandoff { handoff_id: String },
}

impl HarvestErrorCode for ChainError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidPredecessor { .. } => error_code::INVALID_PREDECESSOR,
            Self::DuplicateHandoff { .. } => error_code::DUPLICATE_HANDOFF,
            Self::SuccessorAlreadyLinked { .. } => error_code::SUCCESSOR_ALREADY_LINKED,
            Self::UnregisteredHandoff { .. } => error_code::UNREGISTERED_HANDOFF,
        }
    }
}
