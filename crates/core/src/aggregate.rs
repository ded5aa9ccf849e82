//! Grouped aggregates - batches of change records sharing a grouping key.
//!
//! An aggregate is one collapsible row in the review UI. Its scalar fields
//! (`actor_id`, property values, `timestamp_created`) mirror the **last**
//! record folded into it; later members silently overwrite earlier ones.
//! This is observed upstream behavior and is preserved as-is.

use crate::record::{ChangeRecord, RecordId, Timestamp};
use alloc::string::String;
use alloc::vec::Vec;

/// A group of change records sharing a grouping key.
///
/// Created by the grouping assembler and consumed read-only by the tree
/// projector and the mutation coordinator. Aggregates are replaced wholesale
/// whenever the source collection is re-fetched or a member subset is
/// committed or deleted; they are never patched in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupedAggregate {
    grouping_key: String,
    actor_id: String,
    property_old_value: Option<String>,
    property_new_value: Option<String>,
    timestamp_created: Timestamp,
    members: Vec<ChangeRecord>,
}

impl GroupedAggregate {
    /// Creates an aggregate from its first member.
    pub fn seed(grouping_key: String, record: ChangeRecord) -> Self {
        let mut aggregate = Self {
            grouping_key,
            actor_id: String::new(),
            property_old_value: None,
            property_new_value: None,
            timestamp_created: 0,
            members: Vec::new(),
        };
        aggregate.fold(record);
        aggregate
    }

    /// Folds another record into the aggregate.
    ///
    /// The member list grows in fold order; the scalar fields are overwritten
    /// by every fold, so they always reflect the last member.
    pub fn fold(&mut self, record: ChangeRecord) {
        self.actor_id = record.actor_id().into();
        self.property_old_value = record.property_old_value().map(Into::into);
        self.property_new_value = record.property_new_value().map(Into::into);
        self.timestamp_created = record.timestamp_created();
        self.members.push(record);
    }

    /// Returns the grouping key shared by all members.
    #[inline]
    pub fn grouping_key(&self) -> &str {
        &self.grouping_key
    }

    /// Returns the actor of the last folded member.
    #[inline]
    pub fn actor_id(&self) -> &str {
        &self.actor_id
    }

    /// Returns the old property value of the last folded member.
    #[inline]
    pub fn property_old_value(&self) -> Option<&str> {
        self.property_old_value.as_deref()
    }

    /// Returns the new property value of the last folded member.
    #[inline]
    pub fn property_new_value(&self) -> Option<&str> {
        self.property_new_value.as_deref()
    }

    /// Returns the creation timestamp of the last folded member.
    ///
    /// This doubles as the aggregate's scope key for mutations.
    #[inline]
    pub fn timestamp_created(&self) -> Timestamp {
        self.timestamp_created
    }

    /// Returns the members in fold order.
    #[inline]
    pub fn members(&self) -> &[ChangeRecord] {
        &self.members
    }

    /// Returns the number of members.
    ///
    /// Derived from the member list so it cannot drift out of sync.
    #[inline]
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Returns the member identifiers in fold order.
    ///
    /// This is the flattened id list handed to the transport collaborator on
    /// commit and delete.
    pub fn member_ids(&self) -> Vec<RecordId> {
        self.members.iter().map(ChangeRecord::id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn make_record(id: RecordId, ts: Timestamp, actor: &str) -> ChangeRecord {
        ChangeRecord::new(id, 100, ts, "A", "B", actor)
    }

    #[test]
    fn test_aggregate_seed() {
        let aggregate = GroupedAggregate::seed("AB".to_string(), make_record(1, 1000, "u1"));

        assert_eq!(aggregate.grouping_key(), "AB");
        assert_eq!(aggregate.actor_id(), "u1");
        assert_eq!(aggregate.timestamp_created(), 1000);
        assert_eq!(aggregate.member_count(), 1);
    }

    #[test]
    fn test_aggregate_fold_overwrites_scalars() {
        let mut aggregate = GroupedAggregate::seed("AB".to_string(), make_record(1, 1000, "u1"));
        aggregate.fold(make_record(2, 2000, "u2"));

        // Last member wins for every scalar field
        assert_eq!(aggregate.actor_id(), "u2");
        assert_eq!(aggregate.timestamp_created(), 2000);
        assert_eq!(aggregate.member_count(), 2);

        // Member order is fold order
        assert_eq!(aggregate.members()[0].id(), 1);
        assert_eq!(aggregate.members()[1].id(), 2);
    }

    #[test]
    fn test_aggregate_member_ids() {
        let mut aggregate = GroupedAggregate::seed("AB".to_string(), make_record(3, 1000, "u1"));
        aggregate.fold(make_record(7, 2000, "u1"));
        aggregate.fold(make_record(5, 3000, "u1"));

        assert_eq!(aggregate.member_ids(), alloc::vec![3, 7, 5]);
    }

    #[test]
    fn test_aggregate_fold_missing_values() {
        let mut aggregate = GroupedAggregate::seed("AB".to_string(), make_record(1, 1000, "u1"));
        aggregate.fold(ChangeRecord::from_values(2, 100, 2000, None, None, "u2"));

        assert_eq!(aggregate.property_old_value(), None);
        assert_eq!(aggregate.property_new_value(), None);
    }
}
