//! Outline model for rendering grouped aggregates as a flat tree.
//!
//! Binds the pending-change hierarchy (aggregate rows expanding into their
//! member records) to the generic tree projector, so the review screen uses
//! the same flattening engine as the asset hierarchy views.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use tracklet_core::{ChangeRecord, GroupedAggregate, RecordId, Timestamp};
use tracklet_tree::TreeModel;

/// A node in the pending-change hierarchy.
#[derive(Clone, Debug)]
pub enum PendingNode {
    /// An aggregate row; expands into its members.
    Group(GroupedAggregate),
    /// A single change record; always a leaf.
    Member(ChangeRecord),
}

/// Identity key for a pending node.
///
/// Groups are keyed by their scope key, members by record id; the variants
/// keep the two namespaces from colliding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PendingKey {
    Group(Timestamp),
    Member(RecordId),
}

/// Display fields of one outline row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingRow {
    /// "old -> new" change summary
    pub label: String,
    /// Actor shown on the row
    pub actor_id: String,
    /// Creation timestamp shown on the row
    pub timestamp: Timestamp,
    /// Members represented by the row; 1 for member rows
    pub member_count: usize,
}

/// `TreeModel` binding for the pending-change hierarchy.
pub struct PendingOutline;

fn change_label(old: Option<&str>, new: Option<&str>) -> String {
    format!("{} -> {}", old.unwrap_or(""), new.unwrap_or(""))
}

impl TreeModel for PendingOutline {
    type Source = PendingNode;
    type Key = PendingKey;
    type Flat = PendingRow;

    fn key(&self, node: &PendingNode) -> PendingKey {
        match node {
            PendingNode::Group(group) => PendingKey::Group(group.timestamp_created()),
            PendingNode::Member(record) => PendingKey::Member(record.id()),
        }
    }

    fn children(&self, node: &PendingNode) -> Vec<PendingNode> {
        match node {
            PendingNode::Group(group) => group
                .members()
                .iter()
                .cloned()
                .map(PendingNode::Member)
                .collect(),
            PendingNode::Member(_) => Vec::new(),
        }
    }

    fn has_children(&self, node: &PendingNode) -> bool {
        // Answered structurally, so collapsed groups never clone members
        match node {
            PendingNode::Group(group) => group.member_count() > 0,
            PendingNode::Member(_) => false,
        }
    }

    fn transform(&self, node: &PendingNode, _depth: usize) -> PendingRow {
        match node {
            PendingNode::Group(group) => PendingRow {
                label: change_label(group.property_old_value(), group.property_new_value()),
                actor_id: group.actor_id().into(),
                timestamp: group.timestamp_created(),
                member_count: group.member_count(),
            },
            PendingNode::Member(record) => PendingRow {
                label: change_label(record.property_old_value(), record.property_new_value()),
                actor_id: record.actor_id().into(),
                timestamp: record.timestamp_created(),
                member_count: 1,
            },
        }
    }
}

/// Wraps aggregates as outline roots for projection.
pub fn outline_roots(groups: &[GroupedAggregate]) -> Vec<PendingNode> {
    groups.iter().cloned().map(PendingNode::Group).collect()
}
