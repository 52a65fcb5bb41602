//! Assembles and validates a routing hierarchy.
//!
//! The builder collects nodes and labelled branches, then `build` checks the
//! result is a proper binary tree before any lot is routed through it.

use std::collections::HashMap;

use petgraph::algo::is_cyclic_directed;
use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use harvest_core::config::RoutingConfig;
use harvest_core::errors::{RoutingError, RoutingResult};
use harvest_core::models::{NodeId, Region};

use crate::classifier::Classifier;
use crate::demand::DemandTable;
use crate::hierarchy::{HierarchyGraph, RoutingHierarchy};
use crate::node::{Branch, DecisionNode};

/// Identifier of the root of the standard hierarchy.
pub const ROOT_ID: &str = "root";

#[derive(Debug, Default)]
pub struct HierarchyBuilder {
    nodes: Vec<DecisionNode>,
    branches: Vec<(NodeId, Branch, NodeId)>,
}

impl HierarchyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed production layout: region pair, region, quality gate, with
    /// a Premium and a Standard destination under every region.
    pub fn standard(config: &RoutingConfig) -> Self {
        let gate = || Classifier::QualityGate {
            metric: config.quality_metric.clone(),
            threshold: config.premium_threshold,
        };

        let mut builder = Self::new()
            .node(DecisionNode::decision(
                ROOT_ID,
                "Region Split: North/South vs East/West",
                Classifier::RegionMembership {
                    regions: vec![Region::North, Region::South],
                },
            ))
            .node(DecisionNode::decision(
                "northSouth",
                "North vs South",
                Classifier::RegionEquals {
                    region: Region::North,
                },
            ))
            .node(DecisionNode::decision(
                "eastWest",
                "East vs West",
                Classifier::RegionEquals {
                    region: Region::East,
                },
            ))
            .branch(ROOT_ID, Branch::True, "northSouth")
            .branch(ROOT_ID, Branch::False, "eastWest");

        let placements = [
            ("northSouth", Branch::True, Region::North),
            ("northSouth", Branch::False, Region::South),
            ("eastWest", Branch::True, Region::East),
            ("eastWest", Branch::False, Region::West),
        ];
        for (parent, branch, region) in placements {
            let gate_id = region.name().to_lowercase();
            let premium = format!("{gate_id}Premium");
            let standard = format!("{gate_id}Standard");
            builder = builder
                .node(DecisionNode::decision(
                    gate_id.as_str(),
                    format!("{region}: Premium vs Standard"),
                    gate(),
                ))
                .node(DecisionNode::terminal(premium.as_str(), format!("{region} Premium")))
                .node(DecisionNode::terminal(standard.as_str(), format!("{region} Standard")))
                .branch(parent, branch, gate_id.as_str())
                .branch(gate_id.as_str(), Branch::True, premium.as_str())
                .branch(gate_id.as_str(), Branch::False, standard.as_str());
        }
        builder
    }

    pub fn node(mut self, node: DecisionNode) -> Self {
        self.nodes.push(node);
        self
    }

    /// Declare `child` as the `branch` outcome of `parent`.
    pub fn branch(mut self, parent: impl Into<NodeId>, branch: Branch, child: impl Into<NodeId>) -> Self {
        self.branches.push((parent.into(), branch, child.into()));
        self
    }

    /// Validate the shape and produce the hierarchy.
    ///
    /// Rejects duplicate ids, dangling branches, terminals with children,
    /// cycles, nodes shared between parents or unreachable from `root`, and
    /// decision nodes without exactly one true and one false child.
    pub fn build(self, root: &str, demand: DemandTable) -> RoutingResult<RoutingHierarchy> {
        let mut graph = HierarchyGraph::default();
        let mut node_index: HashMap<NodeId, NodeIndex> = HashMap::new();

        for node in self.nodes {
            if node_index.contains_key(&node.id) {
                return Err(malformed(format!("duplicate node id {}", node.id)));
            }
            let id = node.id.clone();
            let idx = graph.add_node(node);
            node_index.insert(id, idx);
        }

        for (parent, branch, child) in self.branches {
            let parent_idx = lookup(&node_index, &parent)?;
            let child_idx = lookup(&node_index, &child)?;
            if graph[parent_idx].is_terminal() {
                return Err(malformed(format!("terminal {parent} cannot have children")));
            }
            if graph
                .edges_directed(parent_idx, Direction::Outgoing)
                .any(|edge| *edge.weight() == branch)
            {
                return Err(malformed(format!(
                    "{parent} already has a {} branch",
                    branch.label()
                )));
            }
            graph.add_edge(parent_idx, child_idx, branch);
        }

        if is_cyclic_directed(&graph) {
            return Err(malformed("cycle detected".to_string()));
        }

        let root_idx = lookup(&node_index, &NodeId::from(root))?;
        check_tree_shape(&graph, root_idx)?;

        Ok(RoutingHierarchy::from_parts(graph, root_idx, node_index, demand))
    }
}

fn check_tree_shape(graph: &HierarchyGraph, root: NodeIndex) -> RoutingResult<()> {
    for idx in graph.node_indices() {
        let node = &graph[idx];
        let parents = graph.edges_directed(idx, Direction::Incoming).count();
        let expected_parents = usize::from(idx != root);
        if parents != expected_parents {
            return Err(malformed(format!(
                "{} has {parents} parents, expected {expected_parents}",
                node.id
            )));
        }
        let children = graph.edges_directed(idx, Direction::Outgoing).count();
        if !node.is_terminal() && children != 2 {
            return Err(malformed(format!(
                "decision node {} has {children} children, expected 2",
                node.id
            )));
        }
    }
    Ok(())
}

fn lookup(node_index: &HashMap<NodeId, NodeIndex>, id: &NodeId) -> RoutingResult<NodeIndex> {
    node_index
        .get(id)
        .copied()
        .ok_or_else(|| malformed(format!("branch refers to unknown node {id}")))
}

fn malformed(details: String) -> RoutingError {
    RoutingError::MalformedHierarchy { details }
}
