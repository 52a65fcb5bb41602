//! Model errors.

use super::error_code::{self, HarvestErrorCode};

/// Errors raised while interpreting model values handed in by the shell.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("unknown region code: {value}")]
    UnknownRegion { value: String },
}

impl HarvestErrorCode for ModelError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownRegion { .. } => error_code::UNKNOWN_REGION,
        }
    }
}
