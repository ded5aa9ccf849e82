//! Tracklet Core - Core domain types for the Tracklet asset-tracking system.
//!
//! This crate provides the foundational types shared by the Tracklet crates:
//!
//! - `ChangeRecord`: An atomic unit of change to a tracked entity
//! - `RecordStatus`: Lifecycle status of a change record (Pending, Committed, Deleted)
//! - `GroupedAggregate`: A batch of change records sharing a grouping key
//! - `Error`: Error types for Tracklet operations
//!
//! # Example
//!
//! ```rust
//! use tracklet_core::{ChangeRecord, RecordStatus};
//!
//! let record = ChangeRecord::new(1, 100, 1700000000000, "WH-A", "WH-B", "u1");
//!
//! assert_eq!(record.id(), 1);
//! assert_eq!(record.property_old_value(), Some("WH-A"));
//! assert_eq!(record.status(), RecordStatus::Pending);
//! ```

#![no_std]

extern crate alloc;

mod aggregate;
mod error;
mod record;

pub use aggregate::GroupedAggregate;
pub use error::{Error, Result};
pub use record::{ChangeRecord, EntityId, RecordId, RecordStatus, Timestamp};
