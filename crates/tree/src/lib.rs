//! Tracklet Tree - Generic recursive-to-flat tree projection.
//!
//! This crate flattens arbitrary recursive domain hierarchies into ordered,
//! depth-annotated lists for indentable flat rendering (virtualized lists,
//! table rows). One parametric engine serves every hierarchy in the
//! application; each view supplies its own `TreeModel` strategy.
//!
//! # Core Concepts
//!
//! - `TreeModel`: Strategy trait binding a domain node type to its identity
//!   key, children, and display projection
//! - `TreeProjector`: Owns the expansion set and performs the pre-order
//!   flattening
//! - `FlatNode`: One row of output - identity key, depth, structural
//!   expandability, and the caller's display fields
//!
//! # Key Features
//!
//! - Roots are always emitted; descendants are materialized only while their
//!   parent is expanded
//! - Expandability is structural (the node has children), independent of the
//!   expansion toggle
//! - Re-projection is idempotent and order-stable under partial re-expansion
//!
//! Cyclic inputs are unsupported: the projector does not detect cycles and
//! will not terminate on one. The domain model is trusted to be a tree.

#![no_std]

extern crate alloc;

mod projector;

pub use projector::{FlatNode, TreeModel, TreeProjector};
