//! Property tests: reflexivity and order independence of the diff.

use ecudiff_core::diff::diff;
use ecudiff_core::{compare, Block, CodingItem, DiffOptions, EcuRecord, Node, Snapshot};
use proptest::prelude::*;
use std::collections::BTreeMap;

fn item_strategy() -> impl Strategy<Value = CodingItem> {
    let name = "[A-Z][a-z]{0,6}";
    prop_oneof![
        (name, "[a-z0-9]{1,4}").prop_map(|(n, v)| CodingItem::text(n, v)),
        (name, "[01]{8}").prop_map(|(n, bits)| CodingItem::binary(n, "0x00", bits)),
    ]
}

/// Items with unique names, so reordering cannot change which duplicate wins
fn unique_items() -> impl Strategy<Value = Vec<CodingItem>> {
    prop::collection::vec(item_strategy(), 0..12).prop_map(|items| {
        items
            .into_iter()
            .map(|item| (item.display_name.clone(), item))
            .collect::<BTreeMap<_, _>>()
            .into_values()
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_self_compare_is_empty(items in unique_items(), ident in unique_items()) {
        let record = EcuRecord::new("0017", "Instruments")
            .with_block(Block::identification(Node::items(ident)))
            .with_block(Block::coding(Node::items(items)));
        let snapshot = Snapshot::from_records(vec![record]);

        prop_assert!(compare(&snapshot, &snapshot, &DiffOptions::default()).is_empty());
    }

    #[test]
    fn prop_diff_independent_of_input_order(
        base in unique_items(),
        other in unique_items(),
        rotate_base in 0usize..12,
        rotate_other in 0usize..12,
    ) {
        let options = DiffOptions::default();
        let expected = diff(&Node::items(base.clone()), &Node::items(other.clone()), "Coding", &options);

        let mut base_shuffled = base;
        let mut other_shuffled = other;
        base_shuffled.reverse();
        if !base_shuffled.is_empty() {
            let n = rotate_base % base_shuffled.len();
            base_shuffled.rotate_left(n);
        }
        if !other_shuffled.is_empty() {
            let n = rotate_other % other_shuffled.len();
            other_shuffled.rotate_left(n);
        }
        let actual = diff(&Node::items(base_shuffled), &Node::items(other_shuffled), "Coding", &options);

        prop_assert_eq!(expected, actual);
    }

    #[test]
    fn prop_rows_sorted_by_name(base in unique_items(), other in unique_items()) {
        if let Some(table) = diff(&Node::items(base), &Node::items(other), "Coding", &DiffOptions::default()) {
            let names: Vec<&String> = table.rows.iter().map(|r| &r.name).collect();
            let mut sorted = names.clone();
            sorted.sort();
            prop_assert_eq!(names, sorted);
        }
    }
}
