//! Decision nodes, branch labels, and terminal queues.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use harvest_core::models::{HandoffId, NodeId};

use crate::classifier::Classifier;

/// Edge label: which outcome of the parent's predicate leads here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    True,
    False,
}

impl Branch {
    /// The label written into routing annotations.
    pub fn label(self) -> &'static str {
        match self {
            Self::True => "left",
            Self::False => "right",
        }
    }
}

impl From<bool> for Branch {
    fn from(outcome: bool) -> Self {
        if outcome {
            Self::True
        } else {
            Self::False
        }
    }
}

/// FIFO of handoffs waiting at a terminal destination.
///
/// Holds identifiers only; the provenance chain owns the records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TerminalQueue {
    pending: VecDeque<HandoffId>,
}

impl TerminalQueue {
    pub fn enqueue(&mut self, handoff_id: HandoffId) {
        self.pending.push_back(handoff_id);
    }

    /// Remove and return the oldest entry.
    pub fn dequeue(&mut self) -> Option<HandoffId> {
        self.pending.pop_front()
    }

    /// Remove `handoff_id` wherever it waits, keeping the others in order.
    pub fn remove(&mut self, handoff_id: &HandoffId) -> bool {
        match self.pending.iter().position(|id| id == handoff_id) {
            Some(pos) => self.pending.remove(pos).is_some(),
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &HandoffId> {
        self.pending.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeKind {
    /// Internal node: its predicate picks the true or false child.
    Decision { classifier: Classifier },
    /// Leaf: a destination with its processing queue.
    Terminal { queue: TerminalQueue },
}

/// A node of the routing hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionNode {
    pub id: NodeId,
    pub description: String,
    pub kind: NodeKind,
}

impl DecisionNode {
    pub fn decision(id: impl Into<NodeId>, description: impl Into<String>, classifier: Classifier) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            kind: NodeKind::Decision { classifier },
        }
    }

    pub fn terminal(id: impl Into<NodeId>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            kind: NodeKind::Terminal {
                queue: TerminalQueue::default(),
            },
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, NodeKind::Terminal { .. })
    }

    pub fn classifier(&self) -> Option<&Classifier> {
        match &self.kind {
            NodeKind::Decision { classifier } => Some(classifier),
            NodeKind::Terminal { .. } => None,
        }
    }

    pub fn queue(&self) -> Option<&TerminalQueue> {
        match &self.kind {
            NodeKind::Terminal { queue } => Some(queue),
            NodeKind::Decision { .. } => None,
        }
    }

    pub(crate) fn queue_mut(&mut self) -> Option<&mut TerminalQueue> {
        match &mut self.kind {
            NodeKind::Terminal { queue } => Some(queue),
            NodeKind::Decision { .. } => None,
        }
    }

    /// Pending entries; zero for decision nodes.
    pub fn queue_len(&self) -> usize {
        self.queue().map_or(0, TerminalQueue::len)
    }

    /// `"<id> (<description>)"`, the form used in destinations and listings.
    pub fn label(&self) -> String {
        format!("{} ({})", self.id, self.description)
    }
}
