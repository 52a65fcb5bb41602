use serde::{Deserialize, Serialize};

use super::defaults;

/// How the shell's [`IdGenerator`](crate::identity::IdGenerator) mints identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// `<prefix><n>` from one counter shared by lots and handoffs.
    Sequential,
    /// `<prefix>-<uuid v4>`.
    Uuid,
}

/// Identifier generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    pub strategy: IdStrategy,
    /// Sequential counter start; the first identifier uses `start + 1`.
    pub start: u64,
    pub lot_prefix: String,
    pub handoff_prefix: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            strategy: IdStrategy::Sequential,
            start: defaults::DEFAULT_ID_START,
            lot_prefix: defaults::DEFAULT_LOT_PREFIX.to_string(),
            handoff_prefix: defaults::DEFAULT_HANDOFF_PREFIX.to_string(),
        }
    }
}
