//! # harvest-routing
//!
//! Classifies each lot down a fixed, depth-4 binary hierarchy (region pair,
//! region, quality gate) and parks its handoff in one of eight terminal FIFO
//! queues. Every decision is written onto the handoff it affects.

pub mod builder;
pub mod classifier;
pub mod demand;
pub mod hierarchy;
pub mod node;
pub mod walk;

pub use builder::HierarchyBuilder;
pub use classifier::Classifier;
pub use demand::{Demand, DemandLevel, DemandTable};
pub use hierarchy::{QueueStatus, RoutePlan, RouteStep, RoutingHierarchy};
pub use node::{Branch, DecisionNode, NodeKind, TerminalQueue};
pub use walk::TreeEntry;
