//! Property-based tests for tracklet-tree using proptest.

use proptest::prelude::*;
use tracklet_tree::{FlatNode, TreeModel, TreeProjector};

#[derive(Clone, Debug)]
struct Node {
    id: u64,
    children: Vec<Node>,
}

struct IdModel;

impl TreeModel for IdModel {
    type Source = Node;
    type Key = u64;
    type Flat = u64;

    fn key(&self, node: &Node) -> u64 {
        node.id
    }
    fn children(&self, node: &Node) -> Vec<Node> {
        node.children.clone()
    }
    fn has_children(&self, node: &Node) -> bool {
        !node.children.is_empty()
    }
    fn transform(&self, node: &Node, _depth: usize) -> u64 {
        node.id
    }
}

/// Generates a forest of acyclic trees with placeholder ids.
fn forest_strategy() -> impl Strategy<Value = Vec<Node>> {
    let leaf = Just(Node {
        id: 0,
        children: Vec::new(),
    });
    let tree = leaf.prop_recursive(4, 24, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(|children| Node { id: 0, children })
    });
    prop::collection::vec(tree, 0..4)
}

/// Assigns unique ids in pre-order.
fn assign_ids(forest: &mut [Node], next: &mut u64) {
    for node in forest {
        node.id = *next;
        *next += 1;
        assign_ids(&mut node.children, next);
    }
}

fn all_ids(forest: &[Node], out: &mut Vec<u64>) {
    for node in forest {
        out.push(node.id);
        all_ids(&node.children, out);
    }
}

/// Straightforward recursive reference: emit node, then children if expanded.
fn reference_project(
    forest: &[Node],
    depth: usize,
    expanded: &std::collections::HashSet<u64>,
    out: &mut Vec<(u64, usize, bool)>,
) {
    for node in forest {
        let expandable = !node.children.is_empty();
        out.push((node.id, depth, expandable));
        if expandable && expanded.contains(&node.id) {
            reference_project(&node.children, depth + 1, expanded, out);
        }
    }
}

fn rows_as_tuples(rows: &[FlatNode<u64, u64>]) -> Vec<(u64, usize, bool)> {
    rows.iter().map(|r| (r.key, r.depth, r.expandable)).collect()
}

proptest! {
    /// Projection matches a straightforward recursive reference for any
    /// forest and any expansion subset.
    #[test]
    fn projection_matches_reference(
        mut forest in forest_strategy(),
        mask in prop::collection::vec(any::<bool>(), 0..64),
    ) {
        let mut next = 1;
        assign_ids(&mut forest, &mut next);

        let mut ids = Vec::new();
        all_ids(&forest, &mut ids);

        let mut projector = TreeProjector::new(IdModel);
        let mut expanded = std::collections::HashSet::new();
        for (i, id) in ids.iter().enumerate() {
            if mask.get(i).copied().unwrap_or(false) {
                projector.expand(*id);
                expanded.insert(*id);
            }
        }

        let rows = projector.project(&forest);

        let mut expected = Vec::new();
        reference_project(&forest, 0, &expanded, &mut expected);
        prop_assert_eq!(rows_as_tuples(&rows), expected);
    }

    /// Fully expanded projection is exactly the pre-order traversal: every
    /// node appears once, after its ancestors, and depth steps up by at most
    /// one between adjacent rows.
    #[test]
    fn full_expansion_is_preorder(mut forest in forest_strategy()) {
        let mut next = 1;
        assign_ids(&mut forest, &mut next);

        let mut ids = Vec::new();
        all_ids(&forest, &mut ids);

        let mut projector = TreeProjector::new(IdModel);
        for id in &ids {
            projector.expand(*id);
        }

        let rows = projector.project(&forest);
        let row_ids: Vec<u64> = rows.iter().map(|r| r.key).collect();

        // Pre-order numbering was assigned by assign_ids, so a full
        // projection must return ids in sorted order with none missing.
        prop_assert_eq!(row_ids, ids);

        if let Some(first) = rows.first() {
            prop_assert_eq!(first.depth, 0);
        }
        for pair in rows.windows(2) {
            prop_assert!(pair[1].depth <= pair[0].depth + 1);
        }
    }

    /// Expandability always reflects structure, whatever the expansion set
    /// says. Everything is expanded so every node is visible.
    #[test]
    fn expandability_is_structural(mut forest in forest_strategy()) {
        let mut next = 1;
        assign_ids(&mut forest, &mut next);

        let mut ids = Vec::new();
        all_ids(&forest, &mut ids);

        let mut projector = TreeProjector::new(IdModel);
        for id in &ids {
            projector.expand(*id);
        }

        for row in projector.project(&forest) {
            if !row.expandable {
                prop_assert!(!rows_have_children(&forest, row.key));
            } else {
                prop_assert!(rows_have_children(&forest, row.key));
            }
        }
    }

    /// Collapsing and re-expanding the same nodes reproduces the original
    /// projection byte for byte.
    #[test]
    fn reexpansion_roundtrip(mut forest in forest_strategy()) {
        let mut next = 1;
        assign_ids(&mut forest, &mut next);

        let mut ids = Vec::new();
        all_ids(&forest, &mut ids);

        let mut projector = TreeProjector::new(IdModel);
        for id in &ids {
            projector.expand(*id);
        }
        let before = projector.project(&forest);

        if let Some(first) = ids.first() {
            projector.collapse(first);
            projector.expand(*first);
        }
        let after = projector.project(&forest);

        prop_assert_eq!(rows_as_tuples(&before), rows_as_tuples(&after));
    }
}

fn rows_have_children(forest: &[Node], id: u64) -> bool {
    for node in forest {
        if node.id == id {
            return !node.children.is_empty();
        }
        if rows_have_children(&node.children, id) {
            return true;
        }
    }
    false
}
