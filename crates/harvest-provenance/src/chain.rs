//! ProvenanceChain: an arena of handoff records linked by identifier.
//!
//! Records live in a `Vec` in append order. `previous`/`next` links are
//! handoff identifiers resolved through the identifier index, so appends are
//! O(1) and history reconstruction is O(history length).

use std::collections::HashMap;

use tracing::{debug, instrument, trace};

use harvest_core::errors::{ChainError, ChainResult};
use harvest_core::models::{HandoffId, HandoffRecord, LotId, LotSummary};

/// Append-only store of handoff records.
#[derive(Debug, Default)]
pub struct ProvenanceChain {
    /// Canonical records, in append order.
    records: Vec<HandoffRecord>,
    /// Handoff id → position in `records`.
    index: HashMap<HandoffId, usize>,
    /// Lot id → position of the lot's most recent handoff.
    latest: HashMap<LotId, usize>,
    /// Lot ids in the order they were first seen.
    lot_order: Vec<LotId>,
}

impl ProvenanceChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `record`, optionally as the successor of `predecessor`.
    ///
    /// Fails without modifying the chain when:
    /// - `predecessor` is not registered (`InvalidPredecessor`),
    /// - `record.id` is already registered (`DuplicateHandoff`),
    /// - `predecessor` already has a successor (`SuccessorAlreadyLinked`).
    #[instrument(skip(self, record), fields(handoff_id = %record.id, lot_id = %record.lot.id))]
    pub fn append(
        &mut self,
        mut record: HandoffRecord,
        predecessor: Option<&HandoffId>,
    ) -> ChainResult<&HandoffRecord> {
        if self.index.contains_key(&record.id) {
            return Err(ChainError::DuplicateHandoff {
                handoff_id: record.id.to_string(),
            });
        }

        let predecessor_pos = match predecessor {
            Some(predecessor_id) => {
                let pos = self.position(predecessor_id).ok_or_else(|| {
                    ChainError::InvalidPredecessor {
                        predecessor_id: predecessor_id.to_string(),
                    }
                })?;
                if let Some(successor) = self.records[pos].next() {
                    return Err(ChainError::SuccessorAlreadyLinked {
                        predecessor_id: predecessor_id.to_string(),
                        successor_id: successor.to_string(),
                    });
                }
                Some(pos)
            }
            None => None,
        };

        // Nothing below can fail. Links carried in by the caller are discarded.
        record.link_after(predecessor_pos.map(|pos| &mut self.records[pos]));
        let pos = self.records.len();
        self.index.insert(record.id.clone(), pos);
        self.track_latest(&record, pos);
        self.records.push(record);

        debug!(
            position = pos,
            linked = predecessor_pos.is_some(),
            "handoff appended"
        );
        Ok(&self.records[pos])
    }

    /// The custody history of `lot_id`, from its origin handoff to its most
    /// recent one.
    ///
    /// "Most recent" is the greatest `created_at` among the lot's records,
    /// with ties going to the later append. Unknown lots yield an empty history.
    pub fn history_of(&self, lot_id: &LotId) -> Vec<&HandoffRecord> {
        let Some(&latest) = self.latest.get(lot_id) else {
            trace!(%lot_id, "no handoffs recorded for lot");
            return Vec::new();
        };

        // Walk back to the origin. Links only ever point at earlier appends,
        // so the walk is bounded by the arena size.
        let mut origin = latest;
        for _ in 0..self.records.len() {
            match self.records[origin].previous().and_then(|id| self.position(id)) {
                Some(pos) => origin = pos,
                None => break,
            }
        }

        let mut history = Vec::new();
        let mut cursor = Some(origin);
        while let Some(pos) = cursor {
            let record = &self.records[pos];
            history.push(record);
            if pos == latest || history.len() == self.records.len() {
                break;
            }
            cursor = record.next().and_then(|id| self.position(id));
        }

        trace!(%lot_id, length = history.len(), "history reconstructed");
        history
    }

    /// The most recent handoff of every lot seen so far, in first-seen order.
    pub fn latest_per_lot(&self) -> Vec<&HandoffRecord> {
        self.lot_order
            .iter()
            .filter_map(|lot_id| self.latest.get(lot_id))
            .map(|&pos| &self.records[pos])
            .collect()
    }

    /// The most recent handoff of one lot.
    pub fn latest_for(&self, lot_id: &LotId) -> Option<&HandoffRecord> {
        self.latest.get(lot_id).map(|&pos| &self.records[pos])
    }

    /// One listing row per lot, taken from each lot's latest handoff.
    pub fn lot_summaries(&self) -> Vec<LotSummary> {
        self.latest_per_lot()
            .into_iter()
            .map(LotSummary::from)
            .collect()
    }

    pub fn get(&self, id: &HandoffId) -> Option<&HandoffRecord> {
        self.position(id).map(|pos| &self.records[pos])
    }

    pub fn contains(&self, id: &HandoffId) -> bool {
        self.index.contains_key(id)
    }

    /// All records in append order.
    pub fn iter(&self) -> impl Iterator<Item = &HandoffRecord> {
        self.records.iter()
    }

    /// Number of registered handoffs.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of distinct lots seen.
    pub fn lot_count(&self) -> usize {
        self.lot_order.len()
    }

    fn position(&self, id: &HandoffId) -> Option<usize> {
        self.index.get(id).copied()
    }

    fn track_latest(&mut self, record: &HandoffRecord, pos: usize) {
        match self.latest.get(&record.lot.id) {
            Some(&current) if self.records[current].created_at > record.created_at => {}
            Some(_) => {
                self.latest.insert(record.lot.id.clone(), pos);
            }
            None => {
                self.lot_order.push(record.lot.id.clone());
                self.latest.insert(record.lot.id.clone(), pos);
            }
        }
    }
}
