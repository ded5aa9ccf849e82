//! Property-based tests for tracklet-grouping using proptest.

use proptest::prelude::*;
use tracklet_grouping::{assemble, grouping_key, member_total};
use tracklet_core::ChangeRecord;

fn record_strategy() -> impl Strategy<Value = ChangeRecord> {
    (
        any::<u64>(),
        0u64..1000,
        0u64..10_000_000,
        prop::option::of("[A-D]{1,2}"),
        prop::option::of("[A-D]{1,2}"),
        "[a-z][0-9]",
    )
        .prop_map(|(id, entity, ts, old, new, actor)| {
            ChangeRecord::from_values(id, entity, ts, old, new, actor)
        })
}

proptest! {
    /// Re-running on an identical input sequence yields identical groups in
    /// identical order with identical member counts.
    #[test]
    fn assemble_is_deterministic(records in prop::collection::vec(record_strategy(), 0..64)) {
        let first = assemble(&records);
        let second = assemble(&records);
        prop_assert_eq!(first, second);
    }

    /// Every input record lands in exactly one group, in input order within
    /// its group; nothing is dropped or duplicated.
    #[test]
    fn assemble_preserves_every_record(records in prop::collection::vec(record_strategy(), 0..64)) {
        let groups = assemble(&records);

        prop_assert_eq!(member_total(&groups), records.len());

        for group in &groups {
            let mut last_index = None;
            for member in group.members() {
                prop_assert_eq!(grouping_key(member), group.grouping_key());
                // Members keep their relative input order
                let index = records.iter().position(|r| r == member);
                prop_assert!(index.is_some());
                if let (Some(prev), Some(current)) = (last_index, index) {
                    prop_assert!(current >= prev);
                }
                last_index = index;
            }
        }
    }

    /// Group order mirrors the first appearance of each distinct key.
    #[test]
    fn group_order_is_first_seen(records in prop::collection::vec(record_strategy(), 0..64)) {
        let groups = assemble(&records);

        let mut seen = Vec::new();
        for record in &records {
            let key = grouping_key(record);
            if !seen.contains(&key) {
                seen.push(key);
            }
        }

        let group_keys: Vec<String> = groups.iter().map(|g| g.grouping_key().to_string()).collect();
        prop_assert_eq!(group_keys, seen);
    }

    /// Scalar fields always mirror the last member of the group.
    #[test]
    fn scalars_mirror_last_member(records in prop::collection::vec(record_strategy(), 1..64)) {
        for group in assemble(&records) {
            let last = group.members().last().unwrap();
            prop_assert_eq!(group.actor_id(), last.actor_id());
            prop_assert_eq!(group.property_old_value(), last.property_old_value());
            prop_assert_eq!(group.property_new_value(), last.property_new_value());
            prop_assert_eq!(group.timestamp_created(), last.timestamp_created());
        }
    }
}
