//! SupplyChainEngine: owns the chain, the routing hierarchy, the identifier
//! generator, and the clock, and sequences them for each user action.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use harvest_core::config::HarvestConfig;
use harvest_core::constants::{INITIAL_HARVEST_ACTION, VERSION};
use harvest_core::errors::{ChainError, HarvestResult};
use harvest_core::models::{HandlerRole, HandoffId, HandoffRecord, LotId, LotSummary};
use harvest_core::{Clock, IdGenerator, SystemClock};
use harvest_provenance::ProvenanceChain;
use harvest_routing::{QueueStatus, RoutingHierarchy, TreeEntry};

use crate::requests::{HarvestIntake, RegisteredLot, TransferRequest};

pub struct SupplyChainEngine {
    chain: ProvenanceChain,
    routing: RoutingHierarchy,
    ids: IdGenerator,
    clock: Arc<dyn Clock>,
}

impl SupplyChainEngine {
    pub fn new(config: &HarvestConfig) -> HarvestResult<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Build with an explicit time source.
    pub fn with_clock(config: &HarvestConfig, clock: Arc<dyn Clock>) -> HarvestResult<Self> {
        config.validate()?;
        let routing = RoutingHierarchy::standard(&config.routing)?;
        info!(version = VERSION, terminals = routing.terminals().count(), "supply chain engine ready");
        Ok(Self {
            chain: ProvenanceChain::new(),
            routing,
            ids: IdGenerator::new(&config.identity),
            clock,
        })
    }

    /// Create a lot and its origin handoff, route it, and register it.
    ///
    /// Routing runs before the record is appended, so a routing failure
    /// (e.g. a missing quality metric) registers nothing.
    #[instrument(skip(self, intake), fields(category = %intake.category, region = %intake.region))]
    pub fn register_harvest(&mut self, intake: HarvestIntake) -> HarvestResult<RegisteredLot> {
        let lot_id = self.ids.next_lot_id();
        let handoff_id = self.ids.next_handoff_id();
        if self.chain.contains(&handoff_id) {
            return Err(ChainError::DuplicateHandoff {
                handoff_id: handoff_id.to_string(),
            }
            .into());
        }

        let harvested_at = self.clock.now();
        let lot = intake.into_lot(lot_id, harvested_at);
        let mut record = HandoffRecord::new(
            handoff_id.clone(),
            harvested_at,
            lot.producer_id.clone(),
            HandlerRole::Producer,
            lot.origin.clone(),
            INITIAL_HARVEST_ACTION,
            lot.clone(),
        );

        let destination = self.routing.route(&lot, &mut record)?.id.clone();
        self.chain.append(record, None)?;

        info!(lot_id = %lot.id, handoff_id = %handoff_id, destination = %destination, "harvest registered");
        Ok(RegisteredLot {
            lot,
            handoff_id,
            destination,
        })
    }

    /// Dequeue the oldest handoff waiting at `leaf_id`. `Ok(None)` only when
    /// the queue is empty; a queued id with no chain record is an error.
    pub fn take_next(&mut self, leaf_id: &str) -> HarvestResult<Option<HandoffRecord>> {
        let Some(handoff_id) = self.routing.dequeue_from(leaf_id)? else {
            return Ok(None);
        };
        match self.chain.get(&handoff_id) {
            Some(record) => Ok(Some(record.clone())),
            None => {
                warn!(handoff_id = %handoff_id, "queued handoff missing from chain");
                Err(ChainError::UnregisteredHandoff {
                    handoff_id: handoff_id.to_string(),
                }
                .into())
            }
        }
    }

    /// Append a handoff that continues the custody of `predecessor_id`'s lot.
    ///
    /// If the predecessor is still waiting in a terminal queue it is taken out,
    /// so a later `take_next` never yields a handoff that already has a successor.
    #[instrument(skip(self, request), fields(handler = %request.handler_id))]
    pub fn record_transfer(
        &mut self,
        predecessor_id: &HandoffId,
        request: TransferRequest,
    ) -> HarvestResult<&HandoffRecord> {
        let lot = self
            .chain
            .get(predecessor_id)
            .map(|predecessor| predecessor.lot.clone())
            .ok_or_else(|| ChainError::InvalidPredecessor {
                predecessor_id: predecessor_id.to_string(),
            })?;

        let record = HandoffRecord::new(
            self.ids.next_handoff_id(),
            self.clock.now(),
            request.handler_id,
            request.role,
            request.location,
            request.destination.action(),
            lot,
        );
        let appended_id = self.chain.append(record, Some(predecessor_id))?.id.clone();
        if let Some(leaf) = self.routing.withdraw(predecessor_id) {
            debug!(leaf = %leaf, "continued handoff left its queue");
        }

        let appended = self
            .chain
            .get(&appended_id)
            .ok_or_else(|| ChainError::UnregisteredHandoff {
                handoff_id: appended_id.to_string(),
            })?;
        info!(handoff_id = %appended.id, lot_id = %appended.lot.id, "transfer recorded");
        Ok(appended)
    }

    /// `take_next` followed by `record_transfer`.
    pub fn process_next(
        &mut self,
        leaf_id: &str,
        request: TransferRequest,
    ) -> HarvestResult<Option<&HandoffRecord>> {
        let Some(taken) = self.take_next(leaf_id)? else {
            return Ok(None);
        };
        self.record_transfer(&taken.id, request).map(Some)
    }

    /// Origin to most recent handoff; empty for an unknown lot.
    pub fn history(&self, lot_id: &LotId) -> Vec<&HandoffRecord> {
        self.chain.history_of(lot_id)
    }

    /// One summary per lot, from its most recent handoff.
    pub fn available_lots(&self) -> Vec<LotSummary> {
        self.chain.lot_summaries()
    }

    pub fn queue_status(&self) -> Vec<QueueStatus> {
        self.routing.queue_sizes()
    }

    pub fn pending_leaves(&self) -> Vec<QueueStatus> {
        self.routing.leaves_with_pending_items()
    }

    pub fn tree(&self) -> Vec<TreeEntry> {
        self.routing.walk()
    }

    pub fn chain(&self) -> &ProvenanceChain {
        &self.chain
    }

    pub fn routing(&self) -> &RoutingHierarchy {
        &self.routing
    }
}
