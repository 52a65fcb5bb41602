use serde::{Deserialize, Serialize};

use super::{HandlerRole, HandoffRecord, LotId, Region};

/// One row of the "available lots" listing, taken from a lot's latest handoff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LotSummary {
    pub lot_id: LotId,
    pub category: String,
    pub quantity: f64,
    pub region: Region,
    pub handler_role: HandlerRole,
    pub status: String,
}

impl From<&HandoffRecord> for LotSummary {
    fn from(record: &HandoffRecord) -> Self {
        Self {
            lot_id: record.lot.id.clone(),
            category: record.lot.category.clone(),
            quantity: record.lot.quantity,
            region: record.lot.region,
            handler_role: record.handler_role,
            status: record.action.clone(),
        }
    }
}
