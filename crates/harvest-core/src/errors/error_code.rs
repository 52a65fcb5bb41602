//! Stable error codes for callers that match on strings rather than types.

/// Every error enum implements this to expose a structured code string.
pub trait HarvestErrorCode {
    /// Returns the error code string (e.g., "INVALID_PREDECESSOR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_message(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const UNKNOWN_REGION: &str = "UNKNOWN_REGION";
pub const INVALID_PREDECESSOR: &str = "INVALID_PREDECESSOR";
pub const DUPLICATE_HANDOFF: &str = "DUPLICATE_HANDOFF";
pub const SUCCESSOR_ALREADY_LINKED: &str = "SUCCESSOR_ALREADY_LINKED";
pub const UNREGISTERED_HANDOFF: &str = "UNREGISTERED_HANDOFF";
pub const MISSING_METRIC: &str = "MISSING_METRIC";
pub const UNKNOWN_NODE: &str = "UNKNOWN_NODE";
pub const ALREADY_ROUTED: &str = "ALREADY_ROUTED";
pub const MALFORMED_HIERARCHY: &str = "MALFORMED_HIERARCHY";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
