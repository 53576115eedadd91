//! Structural diff engine.
//!
//! Walks two configuration trees in step, matching collection members by
//! `display_name` and comparing leaves by the rule the base leaf selects.
//! Empty results are pruned at every level.

use crate::config::{BlockAlignment, DiffOptions};
use crate::diff::model::{DiffRow, DiffTable, EcuDiff, SectionDiff};
use crate::matcher;
use crate::model::{AdaptionGroup, Block, BlockKind, CodingItem, EcuRecord, Node};
use std::collections::HashMap;

/// Compare one leaf against its counterpart
///
/// The base leaf selects the rule: `bin_value` if it carries `hex_value`,
/// otherwise `display_value`. A base leaf with neither yields nothing.
pub fn compare_leaf(base: &CodingItem, other: Option<&CodingItem>) -> Option<DiffRow> {
    let rule = base.comparison_rule()?;
    let left = base.value(rule);
    let right = other.and_then(|o| o.value(rule));
    (left != right).then(|| DiffRow::new(&base.display_name, left, right))
}

/// Diff two item trees into a single table
///
/// Returns `None` when no differences were found.
pub fn diff(base: &Node, other: &Node, title: &str, options: &DiffOptions) -> Option<DiffTable> {
    let rows = match (base, other) {
        (Node::Leaf(base_item), Node::Leaf(other_item)) => {
            compare_leaf(base_item, Some(other_item)).into_iter().collect()
        }
        _ => diff_collection(base, other, options),
    };
    DiffTable::from_rows(title, rows)
}

/// Collection pair: base-keyed pass, then the residual pass over other
fn diff_collection(base: &Node, other: &Node, options: &DiffOptions) -> Vec<DiffRow> {
    let (base_index, mut remaining) = matcher::align(base, other);
    let mut rows = Vec::new();

    for (name, base_node) in &base_index {
        let Some(base_item) = base_node.as_leaf() else {
            tracing::debug!(
                component = module_path!(),
                display_name = *name,
                "skipping non-leaf member in item collection"
            );
            continue;
        };
        // Every base key consumes its counterpart, even when it yields no row.
        let other_item = remaining.remove(name).and_then(Node::as_leaf);
        rows.extend(compare_leaf(base_item, other_item));
    }

    for (name, other_node) in remaining {
        let Some(other_item) = other_node.as_leaf() else {
            continue;
        };
        if let Some(value) = other_item.display_value.as_deref() {
            rows.push(DiffRow::new(name, None, Some(value)));
        } else if options.report_other_only_binary {
            if let Some(value) = other_item.bin_value.as_deref() {
                rows.push(DiffRow::new(name, None, Some(value)));
            }
        }
    }

    rows.sort_by(|a, b| a.name.cmp(&b.name));
    rows
}

/// Find the group on the other side that corresponds to `name`
///
/// A single group is its own counterpart; in a collection the group is
/// matched by name.
fn counterpart_group<'a>(other: &'a Node, name: &str) -> Option<&'a AdaptionGroup> {
    match other {
        Node::Group(group) => Some(group),
        Node::Collection(_) => matcher::index_node(other)
            .get(name)
            .copied()
            .and_then(Node::as_group),
        Node::Leaf(_) => None,
    }
}

/// Diff an adaption section: one table per group present on both sides
pub fn diff_adaptions(base: &Node, other: &Node, options: &DiffOptions) -> Vec<DiffTable> {
    match base {
        Node::Group(group) => counterpart_group(other, &group.display_name)
            .and_then(|other_group| {
                diff(&group.values, &other_group.values, &group.display_name, options)
            })
            .into_iter()
            .collect(),
        Node::Collection(_) => {
            let (base_index, other_index) = matcher::align(base, other);
            base_index
                .iter()
                .filter_map(|(name, base_node)| {
                    let Some(base_group) = base_node.as_group() else {
                        tracing::debug!(
                            component = module_path!(),
                            display_name = *name,
                            "skipping non-group member in adaption section"
                        );
                        return None;
                    };
                    let Some(other_group) = other_index.get(name).copied().and_then(Node::as_group)
                    else {
                        tracing::debug!(
                            component = module_path!(),
                            display_name = *name,
                            "adaption group has no counterpart"
                        );
                        return None;
                    };
                    diff(
                        &base_group.values,
                        &other_group.values,
                        &base_group.display_name,
                        options,
                    )
                })
                .collect()
        }
        Node::Leaf(item) => {
            tracing::debug!(
                component = module_path!(),
                display_name = %item.display_name,
                "skipping bare item in adaption section"
            );
            Vec::new()
        }
    }
}

/// Pair every base block with its counterpart in other, if any
pub fn pair_blocks<'a>(
    base: &'a [Block],
    other: &'a [Block],
    alignment: BlockAlignment,
) -> Vec<(&'a Block, Option<&'a Block>)> {
    match alignment {
        BlockAlignment::Positional => base
            .iter()
            .enumerate()
            .map(|(idx, block)| (block, other.get(idx)))
            .collect(),
        BlockAlignment::ByKind => {
            let mut seen: HashMap<BlockKind, usize> = HashMap::new();
            base.iter()
                .map(|block| {
                    let occurrence = seen.entry(block.kind).or_insert(0);
                    let counterpart = other
                        .iter()
                        .filter(|b| b.kind == block.kind)
                        .nth(*occurrence);
                    *occurrence += 1;
                    (block, counterpart)
                })
                .collect()
        }
    }
}

/// Diff one block against its counterpart
///
/// A missing counterpart is compared as an empty collection.
pub fn diff_block(base: &Block, other: Option<&Block>, options: &DiffOptions) -> Option<SectionDiff> {
    let empty = Node::empty();
    let other_values = match other {
        Some(block) => &block.values,
        None => {
            tracing::debug!(
                component = module_path!(),
                block_kind = %base.kind,
                "block has no counterpart"
            );
            &empty
        }
    };

    let tables = match base.kind {
        BlockKind::AdaptionSection => diff_adaptions(&base.values, other_values, options),
        kind => {
            let title = kind.table_title().unwrap_or(kind.heading());
            diff(&base.values, other_values, title, options)
                .into_iter()
                .collect()
        }
    };
    SectionDiff::from_tables(base.kind, tables)
}

/// Diff two records of the same ECU
///
/// Returns `None` when the ECU has no differences.
pub fn diff_ecu(base: &EcuRecord, other: &EcuRecord, options: &DiffOptions) -> Option<EcuDiff> {
    let sections: Vec<SectionDiff> = pair_blocks(&base.blocks, &other.blocks, options.block_alignment)
        .into_iter()
        .filter_map(|(base_block, other_block)| diff_block(base_block, other_block, options))
        .collect();

    if sections.is_empty() {
        return None;
    }
    Some(EcuDiff {
        ecu_id: base.id.clone(),
        ecu_name: base.name.clone(),
        sections,
    })
}
