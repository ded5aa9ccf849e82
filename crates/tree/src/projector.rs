//! Tree projector implementation.

use alloc::vec::Vec;
use core::hash::Hash;
use hashbrown::HashSet;

/// Strategy trait binding a recursive domain type to the projector.
///
/// Implementations must be pure: `children` is called repeatedly across
/// projections and must not mutate the node or observe projector state.
pub trait TreeModel {
    /// The recursive domain node type.
    type Source;
    /// Identity key linking a flat row back to its domain node.
    type Key: Clone + Eq + Hash;
    /// The caller's display projection of a node.
    type Flat;

    /// Returns the identity key of a node.
    fn key(&self, node: &Self::Source) -> Self::Key;

    /// Materializes the children of a node, in display order.
    fn children(&self, node: &Self::Source) -> Vec<Self::Source>;

    /// Returns true if the node has at least one child.
    ///
    /// Override when emptiness can be answered without materializing the
    /// children; the projector then only calls `children` for nodes that are
    /// actually expanded.
    fn has_children(&self, node: &Self::Source) -> bool {
        !self.children(node).is_empty()
    }

    /// Maps a node to its display fields at the given depth.
    fn transform(&self, node: &Self::Source, depth: usize) -> Self::Flat;
}

/// One row of projection output.
///
/// Flat nodes have no lifecycle of their own; the whole list is regenerated
/// whenever the source collection or the expansion set changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlatNode<K, F> {
    /// Identity link back to the domain node
    pub key: K,
    /// Indentation depth; roots are 0
    pub depth: usize,
    /// Structural flag: the node has at least one child
    pub expandable: bool,
    /// Caller display fields
    pub item: F,
}

/// Flattens a recursive hierarchy into an ordered, depth-annotated list.
///
/// The projector owns the expansion set - the presentational toggle layered
/// on top of the structural `expandable` flag. Toggling expansion and
/// re-projecting preserves the relative order of untouched siblings, so
/// incremental UI updates stay stable.
///
/// # Example
///
/// ```rust
/// use tracklet_tree::{FlatNode, TreeModel, TreeProjector};
///
/// #[derive(Clone)]
/// struct Site {
///     id: u64,
///     zones: Vec<Site>,
/// }
///
/// struct SiteModel;
///
/// impl TreeModel for SiteModel {
///     type Source = Site;
///     type Key = u64;
///     type Flat = u64;
///
///     fn key(&self, node: &Site) -> u64 {
///         node.id
///     }
///     fn children(&self, node: &Site) -> Vec<Site> {
///         node.zones.clone()
///     }
///     fn has_children(&self, node: &Site) -> bool {
///         !node.zones.is_empty()
///     }
///     fn transform(&self, node: &Site, _depth: usize) -> u64 {
///         node.id
///     }
/// }
///
/// let roots = vec![Site { id: 1, zones: vec![Site { id: 2, zones: vec![] }] }];
/// let mut projector = TreeProjector::new(SiteModel);
///
/// // Collapsed: only the root is materialized
/// assert_eq!(projector.project(&roots).len(), 1);
///
/// projector.expand(1);
/// let rows = projector.project(&roots);
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[1].depth, 1);
/// ```
pub struct TreeProjector<M: TreeModel> {
    model: M,
    expanded: HashSet<M::Key>,
}

impl<M: TreeModel> TreeProjector<M> {
    /// Creates a projector with an empty expansion set.
    pub fn new(model: M) -> Self {
        Self {
            model,
            expanded: HashSet::new(),
        }
    }

    /// Returns the model.
    #[inline]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Marks a node expanded. Returns true if it was not already.
    pub fn expand(&mut self, key: M::Key) -> bool {
        self.expanded.insert(key)
    }

    /// Marks a node collapsed. Returns true if it was expanded.
    pub fn collapse(&mut self, key: &M::Key) -> bool {
        self.expanded.remove(key)
    }

    /// Flips a node's expansion. Returns true if it is now expanded.
    pub fn toggle(&mut self, key: M::Key) -> bool {
        if self.expanded.remove(&key) {
            false
        } else {
            self.expanded.insert(key);
            true
        }
    }

    /// Returns true if the node is currently expanded.
    #[inline]
    pub fn is_expanded(&self, key: &M::Key) -> bool {
        self.expanded.contains(key)
    }

    /// Returns the number of expanded nodes.
    #[inline]
    pub fn expanded_count(&self) -> usize {
        self.expanded.len()
    }

    /// Collapses every node.
    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    /// Projects the hierarchy under `roots` into a flat pre-order list.
    ///
    /// Every root is emitted at depth 0 regardless of expansion state; a
    /// node's children are visited only while the node is expanded.
    /// Expandability is evaluated from the data snapshot at projection time.
    pub fn project(&self, roots: &[M::Source]) -> Vec<FlatNode<M::Key, M::Flat>> {
        let mut out = Vec::new();
        for root in roots {
            self.visit(root, 0, &mut out);
        }
        out
    }

    fn visit(&self, node: &M::Source, depth: usize, out: &mut Vec<FlatNode<M::Key, M::Flat>>) {
        let key = self.model.key(node);
        let expandable = self.model.has_children(node);

        out.push(FlatNode {
            key: key.clone(),
            depth,
            expandable,
            item: self.model.transform(node, depth),
        });

        // Children are materialized only for expanded nodes
        if expandable && self.expanded.contains(&key) {
            for child in self.model.children(node) {
                self.visit(&child, depth + 1, out);
            }
        }
    }
}
