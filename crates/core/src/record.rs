//! Change records - the atomic unit of change to a tracked entity.
//!
//! A `ChangeRecord` captures one property change on one entity: the old and
//! new value, the actor who made it, and a creation timestamp. Records are
//! immutable once created; everything downstream (grouping keys, aggregates)
//! is derived from them.

use alloc::string::String;

/// Unique identifier for a change record.
pub type RecordId = u64;

/// Unique identifier for a tracked entity.
pub type EntityId = u64;

/// Milliseconds since the Unix epoch.
pub type Timestamp = u64;

/// Lifecycle status of a change record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordStatus {
    /// Awaiting review; eligible for commit or delete.
    Pending,
    /// Accepted by the remote system.
    Committed,
    /// Discarded by the remote system.
    Deleted,
}

impl RecordStatus {
    /// Returns true if the record is still awaiting review.
    #[inline]
    pub fn is_pending(&self) -> bool {
        matches!(self, RecordStatus::Pending)
    }
}

/// An atomic unit of change to a tracked entity.
///
/// Property values are optional: upstream feeds occasionally omit them, and
/// the record is carried as-is rather than rejected. Missing values only
/// surface later, as degenerate grouping keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChangeRecord {
    id: RecordId,
    entity_id: EntityId,
    timestamp_created: Timestamp,
    property_old_value: Option<String>,
    property_new_value: Option<String>,
    actor_id: String,
    status: RecordStatus,
}

impl ChangeRecord {
    /// Creates a new pending record with both property values present.
    pub fn new(
        id: RecordId,
        entity_id: EntityId,
        timestamp_created: Timestamp,
        property_old_value: impl Into<String>,
        property_new_value: impl Into<String>,
        actor_id: impl Into<String>,
    ) -> Self {
        Self {
            id,
            entity_id,
            timestamp_created,
            property_old_value: Some(property_old_value.into()),
            property_new_value: Some(property_new_value.into()),
            actor_id: actor_id.into(),
            status: RecordStatus::Pending,
        }
    }

    /// Creates a record from raw optional property values.
    ///
    /// This is the form upstream deserialization uses; either value may be
    /// absent.
    pub fn from_values(
        id: RecordId,
        entity_id: EntityId,
        timestamp_created: Timestamp,
        property_old_value: Option<String>,
        property_new_value: Option<String>,
        actor_id: impl Into<String>,
    ) -> Self {
        Self {
            id,
            entity_id,
            timestamp_created,
            property_old_value,
            property_new_value,
            actor_id: actor_id.into(),
            status: RecordStatus::Pending,
        }
    }

    /// Sets the lifecycle status.
    pub fn with_status(mut self, status: RecordStatus) -> Self {
        self.status = status;
        self
    }

    /// Returns the record identifier.
    #[inline]
    pub fn id(&self) -> RecordId {
        self.id
    }

    /// Returns the identifier of the entity this change applies to.
    #[inline]
    pub fn entity_id(&self) -> EntityId {
        self.entity_id
    }

    /// Returns the creation timestamp.
    #[inline]
    pub fn timestamp_created(&self) -> Timestamp {
        self.timestamp_created
    }

    /// Returns the property value before the change, if recorded.
    #[inline]
    pub fn property_old_value(&self) -> Option<&str> {
        self.property_old_value.as_deref()
    }

    /// Returns the property value after the change, if recorded.
    #[inline]
    pub fn property_new_value(&self) -> Option<&str> {
        self.property_new_value.as_deref()
    }

    /// Returns the actor who made the change.
    #[inline]
    pub fn actor_id(&self) -> &str {
        &self.actor_id
    }

    /// Returns the lifecycle status.
    #[inline]
    pub fn status(&self) -> RecordStatus {
        self.status
    }
}
