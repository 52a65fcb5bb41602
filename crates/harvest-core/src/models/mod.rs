//! Lot and handoff models shared by the chain, the routing hierarchy, and the shell.

pub mod handoff;
pub mod ids;
pub mod lot;
pub mod region;
pub mod summary;

pub use handoff::{HandlerRole, HandoffRecord, OnwardDestination};
pub use ids::{HandoffId, LotId, NodeId};
pub use lot::Lot;
pub use region::Region;
pub use summary::LotSummary;
