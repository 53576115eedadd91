//! Structural matcher
//!
//! Aligns two collections of keyed items by `display_name` so corresponding
//! elements can be compared regardless of document order. Indexes are
//! `BTreeMap`s, so iteration is by name ascending.

use crate::model::{AdaptionGroup, CodingItem, Node};
use std::collections::BTreeMap;

/// Name-keyed view over a collection, ordered by name ascending
pub type NameIndex<'a, T> = BTreeMap<&'a str, &'a T>;

/// Anything that exposes a matching key
pub trait Named {
    /// The matching key, or `None` if the value cannot be matched
    fn name(&self) -> Option<&str>;
}

impl Named for CodingItem {
    fn name(&self) -> Option<&str> {
        Some(&self.display_name)
    }
}

impl Named for AdaptionGroup {
    fn name(&self) -> Option<&str> {
        Some(&self.display_name)
    }
}

impl Named for Node {
    fn name(&self) -> Option<&str> {
        self.display_name()
    }
}

/// Index a collection by name
///
/// A repeated name keeps the item that comes last in document order and
/// emits a warning. Unnamed items are skipped.
pub fn index_by_name<'a, T, I>(items: I) -> NameIndex<'a, T>
where
    T: Named + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut index: NameIndex<'a, T> = BTreeMap::new();
    for item in items {
        let Some(name) = item.name() else {
            tracing::debug!(component = module_path!(), "skipping unnamed node");
            continue;
        };
        if index.insert(name, item).is_some() {
            tracing::warn!(
                component = module_path!(),
                display_name = name,
                "duplicate display_name, keeping the last item"
            );
        }
    }
    index
}

/// Index a node's members by name
///
/// A single leaf or group is passed through as a one-entry index.
pub fn index_node(node: &Node) -> NameIndex<'_, Node> {
    match node {
        Node::Collection(children) => index_by_name(children.iter()),
        single => index_by_name(std::iter::once(single)),
    }
}

/// Build name indexes for both sides of a comparison
pub fn align<'a>(base: &'a Node, other: &'a Node) -> (NameIndex<'a, Node>, NameIndex<'a, Node>) {
    (index_node(base), index_node(other))
}
