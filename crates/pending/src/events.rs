//! Domain events and badge accounting.
//!
//! The mutation coordinator never touches the navigation badge directly; it
//! emits `PendingEvent`s, and `BadgeTracker` - the only owner of the counter
//! - folds them into the displayed number. Navigation chrome reads the
//! tracker, nothing else.

/// Unique identifier for an event listener registration.
pub type ListenerId = u64;

/// A change in the outstanding pending workload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendingEvent {
    /// The authoritative pending set was (re)loaded.
    Refreshed { member_total: usize },
    /// One aggregate scope was optimistically removed.
    ScopeRemoved {
        members_removed: usize,
        members_remaining: usize,
    },
    /// Every aggregate was optimistically removed.
    AllRemoved,
}

/// Folds pending events into the navigation badge counter.
#[derive(Clone, Debug, Default)]
pub struct BadgeTracker {
    count: usize,
}

impl BadgeTracker {
    /// Creates a tracker starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current badge value.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Applies one event to the counter.
    pub fn apply(&mut self, event: &PendingEvent) {
        match event {
            PendingEvent::Refreshed { member_total } => self.count = *member_total,
            PendingEvent::ScopeRemoved {
                members_remaining, ..
            } => self.count = *members_remaining,
            PendingEvent::AllRemoved => self.count = 0,
        }
    }
}
