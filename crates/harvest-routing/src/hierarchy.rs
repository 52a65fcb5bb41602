//! The routing hierarchy: a fixed binary tree of decision nodes over a
//! `StableGraph`, with an id index and the terminals cached in tree order.

use std::collections::HashMap;

use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::Serialize;
use tracing::{debug, instrument, trace};

use harvest_core::config::RoutingConfig;
use harvest_core::errors::{RoutingError, RoutingResult};
use harvest_core::models::{HandoffId, HandoffRecord, Lot, NodeId, Region};

use crate::builder::{HierarchyBuilder, ROOT_ID};
use crate::demand::{Demand, DemandTable};
use crate::node::{Branch, DecisionNode};
use crate::walk::{self, TreeEntry};

pub(crate) type HierarchyGraph = StableGraph<DecisionNode, Branch>;

/// One decision taken on the way down.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteStep {
    pub node: NodeId,
    pub branch: Branch,
}

/// The outcome of classifying a lot, computed without touching any queue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub demand: Demand,
    pub steps: Vec<RouteStep>,
    pub terminal: NodeId,
    /// `"Node: <id> (<description>)"`.
    pub destination: String,
}

impl RoutePlan {
    /// Node ids from the root to the terminal.
    pub fn path(&self) -> Vec<&NodeId> {
        self.steps
            .iter()
            .map(|step| &step.node)
            .chain(std::iter::once(&self.terminal))
            .collect()
    }

    /// The text appended to the routed handoff's action.
    pub fn trail(&self) -> String {
        let mut trail = format!(" Regional demand: {}", self.demand);
        for step in &self.steps {
            trail.push_str(&format!(" | {} decision: {}", step.node, step.branch.label()));
        }
        let path: Vec<&str> = self.path().into_iter().map(NodeId::as_str).collect();
        trail.push_str(" | Final path: ");
        trail.push_str(&path.join(" -> "));
        trail
    }
}

/// Pending count of one terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueueStatus {
    pub node_id: NodeId,
    pub description: String,
    pub pending: usize,
}

#[derive(Debug, Clone)]
pub struct RoutingHierarchy {
    graph: HierarchyGraph,
    root: NodeIndex,
    node_index: HashMap<NodeId, NodeIndex>,
    /// Terminals in tree order, true branch first.
    terminals: Vec<NodeIndex>,
    demand: DemandTable,
}

impl RoutingHierarchy {
    /// The standard depth-4 hierarchy with thresholds and demand from config.
    pub fn standard(config: &RoutingConfig) -> RoutingResult<Self> {
        HierarchyBuilder::standard(config).build(ROOT_ID, DemandTable::from_config(config))
    }

    /// Shape must already be validated by the builder.
    pub(crate) fn from_parts(
        graph: HierarchyGraph,
        root: NodeIndex,
        node_index: HashMap<NodeId, NodeIndex>,
        demand: DemandTable,
    ) -> Self {
        let terminals = walk::pre_order(&graph, root)
            .into_iter()
            .map(|(idx, _, _)| idx)
            .filter(|idx| graph[*idx].is_terminal())
            .collect();
        Self {
            graph,
            root,
            node_index,
            terminals,
            demand,
        }
    }

    /// Classify a lot without side effects.
    pub fn plan(&self, lot: &Lot) -> RoutingResult<RoutePlan> {
        let demand = self.demand.demand_for(lot.region, &lot.category);
        let mut steps = Vec::new();
        let mut current = self.root;

        while let Some(classifier) = self.graph[current].classifier() {
            let branch = Branch::from(classifier.evaluate(lot)?);
            let node = &self.graph[current];
            trace!(node = %node.id, branch = branch.label(), "decision");
            steps.push(RouteStep {
                node: node.id.clone(),
                branch,
            });
            current = self.child_index(current, branch).ok_or_else(|| {
                RoutingError::MalformedHierarchy {
                    details: format!("{} has no {} child", node.id, branch.label()),
                }
            })?;
        }

        let terminal = &self.graph[current];
        Ok(RoutePlan {
            demand,
            steps,
            terminal: terminal.id.clone(),
            destination: format!("Node: {}", terminal.label()),
        })
    }

    /// Route a handoff: annotate it, set its destination, and enqueue its id
    /// at the chosen terminal.
    ///
    /// All predicates are evaluated first; on error neither the record nor
    /// any queue is modified.
    #[instrument(skip(self, lot, record), fields(lot_id = %lot.id, handoff_id = %record.id))]
    pub fn route(&mut self, lot: &Lot, record: &mut HandoffRecord) -> RoutingResult<&DecisionNode> {
        if record.is_routed() {
            return Err(RoutingError::AlreadyRouted {
                handoff_id: record.id.to_string(),
                destination: record.destination.clone(),
            });
        }

        let plan = self.plan(lot)?;
        let idx = self.terminal_index(plan.terminal.as_str())?;
        if let Some(queue) = self.graph[idx].queue_mut() {
            queue.enqueue(record.id.clone());
        }
        record.record_routing(&plan.trail(), plan.destination.clone());

        debug!(terminal = %plan.terminal, demand = %plan.demand, "handoff routed");
        Ok(&self.graph[idx])
    }

    pub fn demand_for(&self, region: Region, category: &str) -> Demand {
        self.demand.demand_for(region, category)
    }

    pub fn demand_table(&self) -> &DemandTable {
        &self.demand
    }

    /// Every terminal with its queue length, in tree order.
    pub fn queue_sizes(&self) -> Vec<QueueStatus> {
        self.terminals().map(queue_status).collect()
    }

    /// Terminals with a non-empty queue, in tree order.
    pub fn leaves_with_pending_items(&self) -> Vec<QueueStatus> {
        self.terminals()
            .filter(|node| node.queue_len() > 0)
            .map(queue_status)
            .collect()
    }

    /// Pop the oldest handoff id waiting at a terminal. `Ok(None)` when empty.
    #[instrument(skip(self))]
    pub fn dequeue_from(&mut self, leaf_id: &str) -> RoutingResult<Option<HandoffId>> {
        let idx = self.terminal_index(leaf_id)?;
        let popped = self.graph[idx].queue_mut().and_then(|queue| queue.dequeue());
        debug!(popped = ?popped, "dequeue");
        Ok(popped)
    }

    /// Take a handoff out of whichever terminal queue holds it, for a handoff
    /// whose custody continued without going through `dequeue_from`.
    /// Returns the terminal it was waiting at.
    #[instrument(skip(self))]
    pub fn withdraw(&mut self, handoff_id: &HandoffId) -> Option<NodeId> {
        let idx = self.terminals.iter().copied().find(|idx| {
            self.graph[*idx]
                .queue()
                .is_some_and(|queue| queue.iter().any(|id| id == handoff_id))
        })?;
        let node = &mut self.graph[idx];
        if let Some(queue) = node.queue_mut() {
            queue.remove(handoff_id);
        }
        debug!(terminal = %node.id, "handoff withdrawn");
        Some(node.id.clone())
    }

    pub fn node_by_id(&self, id: &str) -> Option<&DecisionNode> {
        self.node_index.get(id).map(|idx| &self.graph[*idx])
    }

    /// The child reached from `id` on `branch`.
    pub fn child_of(&self, id: &str, branch: Branch) -> Option<&DecisionNode> {
        let idx = self.node_index.get(id)?;
        self.child_index(*idx, branch).map(|child| &self.graph[child])
    }

    pub fn root(&self) -> &DecisionNode {
        &self.graph[self.root]
    }

    /// Terminals in tree order.
    pub fn terminals(&self) -> impl Iterator<Item = &DecisionNode> {
        self.terminals.iter().map(|idx| &self.graph[*idx])
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn total_pending(&self) -> usize {
        self.terminals().map(DecisionNode::queue_len).sum()
    }

    /// Pre-order listing, true branch before false branch.
    pub fn walk(&self) -> Vec<TreeEntry> {
        walk::entries(&self.graph, self.root)
    }

    fn child_index(&self, idx: NodeIndex, branch: Branch) -> Option<NodeIndex> {
        self.graph
            .edges_directed(idx, Direction::Outgoing)
            .find(|edge| *edge.weight() == branch)
            .map(|edge| edge.target())
    }

    fn terminal_index(&self, id: &str) -> RoutingResult<NodeIndex> {
        self.node_index
            .get(id)
            .copied()
            .filter(|idx| self.graph[*idx].is_terminal())
            .ok_or_else(|| RoutingError::UnknownNode {
                node_id: id.to_string(),
            })
    }
}

fn queue_status(node: &DecisionNode) -> QueueStatus {
    QueueStatus {
        node_id: node.id.clone(),
        description: node.description.clone(),
        pending: node.queue_len(),
    }
}
