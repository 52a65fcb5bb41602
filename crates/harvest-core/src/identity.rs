//! Identifier generation for lots and handoffs.
//!
//! The generator is an explicit object owned by whoever builds records; the
//! chain and the routing hierarchy never mint identifiers themselves.
//!
//! # Examples
//!
//! ```
//! use harvest_core::config::IdentityConfig;
//! use harvest_core::IdGenerator;
//!
//! let mut ids = IdGenerator::new(&IdentityConfig::default());
//! assert_eq!(ids.next_lot_id().as_str(), "LOT1001");
//! assert_eq!(ids.next_handoff_id().as_str(), "HND1002");
//! ```

use uuid::Uuid;

use crate::config::{IdStrategy, IdentityConfig};
use crate::models::{HandoffId, LotId};

#[derive(Debug, Clone)]
pub struct IdGenerator {
    strategy: IdStrategy,
    counter: u64,
    lot_prefix: String,
    handoff_prefix: String,
}

impl IdGenerator {
    pub fn new(config: &IdentityConfig) -> Self {
        Self {
            strategy: config.strategy,
            counter: config.start,
            lot_prefix: config.lot_prefix.clone(),
            handoff_prefix: config.handoff_prefix.clone(),
        }
    }

    pub fn next_lot_id(&mut self) -> LotId {
        LotId(mint(self.strategy, &mut self.counter, &self.lot_prefix))
    }

    pub fn next_handoff_id(&mut self) -> HandoffId {
        HandoffId(mint(self.strategy, &mut self.counter, &self.handoff_prefix))
    }
}

fn mint(strategy: IdStrategy, counter: &mut u64, prefix: &str) -> String {
    match strategy {
        IdStrategy::Sequential => {
            *counter += 1;
            format!("{prefix}{counter}")
        }
        IdStrategy::Uuid => format!("{prefix}-{}", Uuid::new_v4()),
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(&IdentityConfig::default())
    }
}
