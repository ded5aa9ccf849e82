//! Transport boundary for the pending-change store.
//!
//! The core has no network stack of its own. The application implements
//! `RecordTransport` over its HTTP layer and hands it to the refresh and
//! mutation drivers. All calls are single-shot.

use alloc::string::String;
use alloc::vec::Vec;
use tracklet_core::{ChangeRecord, EntityId, RecordId, RecordStatus, Result, Timestamp};

/// The two batch mutations the review screen issues.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MutationKind {
    /// Accept the changes remotely.
    Commit,
    /// Discard the changes remotely.
    Delete,
}

/// Filter criteria for a scoped record fetch.
///
/// Unset fields match everything; the collaborator applies the conjunction
/// of the set ones.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FetchCriteria {
    pub entity_id: Option<EntityId>,
    pub actor_id: Option<String>,
    pub status: Option<RecordStatus>,
    pub since: Option<Timestamp>,
}

impl FetchCriteria {
    /// Creates criteria matching everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to one entity.
    pub fn entity(mut self, entity_id: EntityId) -> Self {
        self.entity_id = Some(entity_id);
        self
    }

    /// Restricts to one actor.
    pub fn actor(mut self, actor_id: impl Into<String>) -> Self {
        self.actor_id = Some(actor_id.into());
        self
    }

    /// Restricts to one lifecycle status.
    pub fn status(mut self, status: RecordStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts to records created at or after the timestamp.
    pub fn since(mut self, timestamp: Timestamp) -> Self {
        self.since = Some(timestamp);
        self
    }
}

/// Remote collaborator for fetching and mutating change records.
///
/// Implementations translate these calls onto the application's HTTP
/// endpoints. Retry and backoff policy belongs to the implementation, not to
/// the callers in this crate.
pub trait RecordTransport {
    /// Fetches the authoritative set of pending records.
    fn fetch_pending(&mut self) -> Result<Vec<ChangeRecord>>;

    /// Fetches records matching the criteria.
    fn fetch_filtered(&mut self, criteria: &FetchCriteria) -> Result<Vec<ChangeRecord>>;

    /// Commits the identified records remotely.
    fn commit(&mut self, ids: &[RecordId]) -> Result<()>;

    /// Deletes the identified records remotely.
    fn delete(&mut self, ids: &[RecordId]) -> Result<()>;
}
