//! Error handling for harvest.
//! One error enum per subsystem, `thiserror` only.

pub mod chain_error;
pub mod config_error;
pub mod error_code;
pub mod model_error;
pub mod routing_error;

pub use chain_error::ChainError;
pub use config_error::ConfigError;
pub use error_code::HarvestErrorCode;
pub use model_error::ModelError;
pub use routing_error::RoutingError;

/// Result alias for provenance chain operations.
pub type ChainResult<T> = Result<T, ChainError>;

/// Result alias for routing hierarchy operations.
pub type RoutingResult<T> = Result<T, RoutingError>;

/// Result alias for workflows that cross subsystem boundaries.
pub type HarvestResult<T> = Result<T, HarvestError>;

/// Top-level error aggregating every subsystem via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum HarvestError {
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Chain error: {0}")]
    Chain(#[from] ChainError),

    #[error("Routing error: {0}")]
    Routing(#[from] RoutingError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl HarvestErrorCode for HarvestError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Model(e) => e.error_code(),
            Self::Chain(e) => e.error_code(),
            Self::Routing(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
