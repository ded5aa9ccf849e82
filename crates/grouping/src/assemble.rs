//! Grouping assembler implementation.

use alloc::string::String;
use alloc::vec::Vec;
use hashbrown::HashMap;
use tracklet_core::{ChangeRecord, GroupedAggregate};

/// Computes the grouping key of a record.
///
/// The key is a plain concatenation of the old and new property values, with
/// missing values rendered as the empty string. This is a design choice, not
/// a hash: collisions between different value pairs that concatenate to the
/// same text are accepted, and partitioning stays deterministic either way.
pub fn grouping_key(record: &ChangeRecord) -> String {
    let old = record.property_old_value().unwrap_or("");
    let new = record.property_new_value().unwrap_or("");

    let mut key = String::with_capacity(old.len() + new.len());
    key.push_str(old);
    key.push_str(new);
    key
}

/// Partitions records into grouped aggregates.
///
/// Groups appear in first-seen key order; members keep input order within
/// their group. Empty input yields an empty result. No record is dropped:
/// every input record lands in exactly one group's member list, even though
/// later members overwrite the group's scalar fields.
pub fn assemble(records: &[ChangeRecord]) -> Vec<GroupedAggregate> {
    let mut groups: Vec<GroupedAggregate> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for record in records {
        let key = grouping_key(record);
        match slots.get(&key) {
            Some(&slot) => groups[slot].fold(record.clone()),
            None => {
                slots.insert(key.clone(), groups.len());
                groups.push(GroupedAggregate::seed(key, record.clone()));
            }
        }
    }

    groups
}

/// Sums member counts across aggregates.
///
/// This is the outstanding-work total surfaced as the navigation badge.
pub fn member_total(groups: &[GroupedAggregate]) -> usize {
    groups.iter().map(GroupedAggregate::member_count).sum()
}
