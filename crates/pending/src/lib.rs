//! Tracklet Pending - Pending-change store and optimistic mutation
//! coordinator.
//!
//! This crate owns the review-screen state: the observable cell of grouped
//! pending changes, the optimistic commit/delete orchestration against the
//! remote transport, the badge event channel consumed by navigation chrome,
//! and the outline model that renders aggregates through the generic tree
//! projector.
//!
//! # Core Concepts
//!
//! - `RecordTransport`: The boundary trait the application's HTTP glue
//!   implements (fetch, commit, delete)
//! - `MutationCoordinator`: Per-batch state machine - apply locally, call
//!   remote, roll back on failure by wholesale replacement
//! - `PendingEvent` / `BadgeTracker`: Domain events emitted by the
//!   coordinator; the tracker alone owns the badge counter
//! - `PendingOutline`: `TreeModel` binding aggregates and their members to
//!   the flat tree projector
//!
//! # Mutation lifecycle
//!
//! A batch moves `Idle -> LocallyApplied -> {Confirmed | RolledBack}`:
//! `begin` removes the scoped aggregates from the cell eagerly and returns a
//! ticket carrying the member ids for the remote call; the caller's
//! transport glue later settles the ticket with `confirm` or `roll_back`.
//! While a ticket is open its scope is locked - a second mutation against
//! the same scope is rejected instead of racing the rollback.
//!
//! # Example
//!
//! ```rust
//! use tracklet_pending::{MutationCoordinator, MutationKind, MutationScope};
//! use tracklet_core::ChangeRecord;
//!
//! let mut coordinator = MutationCoordinator::new();
//! coordinator.install(vec![ChangeRecord::new(1, 100, 1000, "A", "B", "u1")]);
//!
//! let ticket = coordinator
//!     .begin(MutationKind::Commit, MutationScope::All)
//!     .unwrap();
//!
//! // The optimistic removal is already visible
//! assert_eq!(
//!     coordinator.state().borrow().snapshot().data().map(Vec::len),
//!     Some(0)
//! );
//!
//! // ... remote call with ticket.record_ids() happens here ...
//! coordinator.confirm(ticket.id()).unwrap();
//! ```

#![no_std]

extern crate alloc;

mod coordinator;
mod events;
mod outline;
mod transport;

pub use coordinator::{
    MutationCoordinator, MutationOutcome, MutationScope, MutationTicket, PendingCell, TicketId,
};
pub use events::{BadgeTracker, ListenerId, PendingEvent};
pub use outline::{outline_roots, PendingKey, PendingNode, PendingOutline, PendingRow};
pub use transport::{FetchCriteria, MutationKind, RecordTransport};
