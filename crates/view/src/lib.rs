//! Tracklet View - Observable view-state cell for Tracklet.
//!
//! This crate implements the tri-state view value used to render
//! asynchronously fetched data, and the observable cell that publishes it.
//!
//! # Core Concepts
//!
//! - `View`: A tagged union over `Loading`, `Ready`, and `Failed`, carrying
//!   the last known-good payload as stale data through reloads and failures
//! - `ViewState`: A single-owner cell with synchronous snapshot reads and
//!   push-based updates to ordered subscribers
//!
//! # Key Features
//!
//! - Stale-while-revalidate is a type-level guarantee: starting a reload
//!   never discards the previous payload
//! - `subscribe()` replays the current value immediately to each new
//!   subscriber (current-value semantics)
//! - Subscribers are notified synchronously, in subscription order
//!
//! # Example
//!
//! ```rust
//! use tracklet_view::{View, ViewState};
//!
//! let mut state: ViewState<u32, &str> = ViewState::new();
//!
//! state.resolve(7);
//! state.begin_load();
//!
//! // The previous payload stays visible while the refresh is in flight
//! let view = state.snapshot();
//! assert!(view.is_loading());
//! assert_eq!(view.data(), Some(&7));
//! ```

#![no_std]

extern crate alloc;

mod state;
mod view;

pub use state::{SubscriptionId, ViewState};
pub use view::View;
