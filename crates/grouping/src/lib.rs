//! Tracklet Grouping - Change-record grouping assembler.
//!
//! This crate turns a flat, timestamp-ordered collection of change records
//! into the grouped aggregates the review UI renders. Grouping is purely a
//! function of the input sequence: same records in the same order, same
//! groups in the same order.
//!
//! # Key Behaviors
//!
//! - The grouping key is the separator-less concatenation of the old and new
//!   property values. Two records with identical values collapse into one
//!   group regardless of entity or actor.
//! - Group order mirrors the first appearance of each distinct key.
//! - Scalar aggregate fields reflect the *last* record folded into the
//!   group (observed upstream behavior, preserved as-is).
//! - Missing property values render as the empty string in the key; the
//!   input is never validated or rejected.

#![no_std]

extern crate alloc;

mod assemble;

pub use assemble::{assemble, grouping_key, member_total};
