//! Read-only pre-order traversal of the hierarchy, for display.

use petgraph::stable_graph::NodeIndex;
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::Serialize;

use harvest_core::models::NodeId;

use crate::hierarchy::HierarchyGraph;
use crate::node::Branch;

/// One line of the tree listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeEntry {
    /// Root is at depth 0.
    pub depth: usize,
    pub node_id: NodeId,
    pub description: String,
    pub is_terminal: bool,
    /// Queue length for terminals, zero for decision nodes.
    pub pending: usize,
    /// The branch taken from the parent; `None` for the root.
    pub branch: Option<Branch>,
}

/// Visit order: node, then its true subtree, then its false subtree.
pub(crate) fn pre_order(graph: &HierarchyGraph, root: NodeIndex) -> Vec<(NodeIndex, usize, Option<Branch>)> {
    let mut order = Vec::with_capacity(graph.node_count());
    let mut stack = vec![(root, 0usize, None)];

    while let Some((idx, depth, via)) = stack.pop() {
        order.push((idx, depth, via));
        // Push false first so the true child is popped next.
        for branch in [Branch::False, Branch::True] {
            if let Some(edge) = graph
                .edges_directed(idx, Direction::Outgoing)
                .find(|edge| *edge.weight() == branch)
            {
                stack.push((edge.target(), depth + 1, Some(branch)));
            }
        }
    }
    order
}

pub(crate) fn entries(graph: &HierarchyGraph, root: NodeIndex) -> Vec<TreeEntry> {
    pre_order(graph, root)
        .into_iter()
        .map(|(idx, depth, branch)| {
            let node = &graph[idx];
            TreeEntry {
                depth,
                node_id: node.id.clone(),
                description: node.description.clone(),
                is_terminal: node.is_terminal(),
                pending: node.queue_len(),
                branch,
            }
        })
        .collect()
}
