use crate::model::node::Node;
use serde::{Deserialize, Serialize};

/// Declared type of an ECU configuration block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// Master - 001 Identification
    Identification,
    /// Master - 006 Read Coding
    CodingSection,
    /// Master - 007 Read Adaptions
    AdaptionSection,
}

impl BlockKind {
    /// Parse the `type` tag used by backup documents
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "ident" => Some(BlockKind::Identification),
            "coding_read" => Some(BlockKind::CodingSection),
            "adaption_read" => Some(BlockKind::AdaptionSection),
            _ => None,
        }
    }

    /// The `type` tag used by backup documents
    pub fn tag(&self) -> &'static str {
        match self {
            BlockKind::Identification => "ident",
            BlockKind::CodingSection => "coding_read",
            BlockKind::AdaptionSection => "adaption_read",
        }
    }

    /// Section heading shown above this block's tables
    pub fn heading(&self) -> &'static str {
        match self {
            BlockKind::Identification => "Master - 001 Identification",
            BlockKind::CodingSection => "Master - 006 Read Coding",
            BlockKind::AdaptionSection => "Master - 007 Read Adaptions",
        }
    }

    /// Fixed table title for single-table sections
    ///
    /// Adaption sections title each table by its group name instead.
    pub fn table_title(&self) -> Option<&'static str> {
        match self {
            BlockKind::Identification => Some("Field"),
            BlockKind::CodingSection => Some("Coding"),
            BlockKind::AdaptionSection => None,
        }
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// One configuration block of an ECU record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub kind: BlockKind,
    pub values: Node,
}

impl Block {
    pub fn new(kind: BlockKind, values: Node) -> Self {
        Self { kind, values }
    }

    pub fn identification(values: Node) -> Self {
        Self::new(BlockKind::Identification, values)
    }

    pub fn coding(values: Node) -> Self {
        Self::new(BlockKind::CodingSection, values)
    }

    pub fn adaptions(values: Node) -> Self {
        Self::new(BlockKind::AdaptionSection, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trip() {
        for kind in [
            BlockKind::Identification,
            BlockKind::CodingSection,
            BlockKind::AdaptionSection,
        ] {
            assert_eq!(BlockKind::from_tag(kind.tag()), Some(kind));
        }
        assert_eq!(BlockKind::from_tag("dtc_read"), None);
    }

    #[test]
    fn test_only_adaptions_lack_fixed_title() {
        assert_eq!(BlockKind::Identification.table_title(), Some("Field"));
        assert_eq!(BlockKind::CodingSection.table_title(), Some("Coding"));
        assert_eq!(BlockKind::AdaptionSection.table_title(), None);
    }
}
