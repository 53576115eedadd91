use serde::{Deserialize, Serialize};

/// Which field a Coding Item is compared by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeafRule {
    /// Binary-coded value: compared via `bin_value`
    Binary,
    /// Plain textual value: compared via `display_value`
    Text,
}

/// Coding Item - a single named configuration value
///
/// Carries either a binary-coded representation (`hex_value` + `bin_value`)
/// or a textual one (`display_value`). The representation present on the
/// base side selects the [`LeafRule`] used for comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodingItem {
    /// Matching key, expected to be unique within its collection
    pub display_name: String,

    /// Hexadecimal rendering of a binary-coded value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex_value: Option<String>,

    /// Binary rendering of a binary-coded value (compared)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bin_value: Option<String>,

    /// Plain textual value (compared)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_value: Option<String>,
}

impl CodingItem {
    /// Create an item with no value fields
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            hex_value: None,
            bin_value: None,
            display_value: None,
        }
    }

    /// Create a textual item
    pub fn text(display_name: impl Into<String>, display_value: impl Into<String>) -> Self {
        Self {
            display_value: Some(display_value.into()),
            ..Self::new(display_name)
        }
    }

    /// Create a binary-coded item
    pub fn binary(
        display_name: impl Into<String>,
        hex_value: impl Into<String>,
        bin_value: impl Into<String>,
    ) -> Self {
        Self {
            hex_value: Some(hex_value.into()),
            bin_value: Some(bin_value.into()),
            ..Self::new(display_name)
        }
    }

    /// The comparison rule this item selects, if it carries a recognized value
    ///
    /// `hex_value` takes precedence over `display_value`.
    pub fn comparison_rule(&self) -> Option<LeafRule> {
        if self.hex_value.is_some() {
            Some(LeafRule::Binary)
        } else if self.display_value.is_some() {
            Some(LeafRule::Text)
        } else {
            None
        }
    }

    /// The value compared under `rule`
    pub fn value(&self, rule: LeafRule) -> Option<&str> {
        match rule {
            LeafRule::Binary => self.bin_value.as_deref(),
            LeafRule::Text => self.display_value.as_deref(),
        }
    }
}

/// Adaption Group - a named cluster of Coding Items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdaptionGroup {
    /// Matching key for the group
    pub display_name: String,

    /// Nested Coding Items (a single leaf or a collection of leaves)
    pub values: Box<Node>,
}

impl AdaptionGroup {
    pub fn new(display_name: impl Into<String>, values: Node) -> Self {
        Self {
            display_name: display_name.into(),
            values: Box::new(values),
        }
    }
}

/// A configuration tree node
///
/// Backup documents hold either a single object or a list of objects at
/// every level; both shapes are represented explicitly here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    Leaf(CodingItem),
    Group(AdaptionGroup),
    Collection(Vec<Node>),
}

impl Node {
    /// An empty collection, used when a block has no counterpart
    pub fn empty() -> Self {
        Node::Collection(Vec::new())
    }

    /// Build a collection of leaves
    pub fn items(items: impl IntoIterator<Item = CodingItem>) -> Self {
        Node::Collection(items.into_iter().map(Node::Leaf).collect())
    }

    /// Build a collection of groups
    pub fn groups(groups: impl IntoIterator<Item = AdaptionGroup>) -> Self {
        Node::Collection(groups.into_iter().map(Node::Group).collect())
    }

    /// The matching key of a single node; collections have none
    pub fn display_name(&self) -> Option<&str> {
        match self {
            Node::Leaf(item) => Some(&item.display_name),
            Node::Group(group) => Some(&group.display_name),
            Node::Collection(_) => None,
        }
    }

    pub fn as_leaf(&self) -> Option<&CodingItem> {
        match self {
            Node::Leaf(item) => Some(item),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&AdaptionGroup> {
        match self {
            Node::Group(group) => Some(group),
            _ => None,
        }
    }

    /// True for a collection with no members
    pub fn is_empty(&self) -> bool {
        matches!(self, Node::Collection(children) if children.is_empty())
    }
}
