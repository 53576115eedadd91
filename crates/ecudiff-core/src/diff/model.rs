//! Diff output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.
//! Every collection is an ordered `Vec` so serialization is deterministic.

use crate::model::BlockKind;
use serde::{Deserialize, Serialize};

/// Schema version of [`DiffReport`]
pub const REPORT_SCHEMA_VERSION: u32 = 1;

/// One differing key
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiffRow {
    /// `display_name` of the differing item
    pub name: String,
    /// Value on the base side (None if the key is absent there)
    pub left_value: Option<String>,
    /// Value on the other side (None if the key is absent there)
    pub right_value: Option<String>,
}

impl DiffRow {
    pub fn new(name: impl Into<String>, left_value: Option<&str>, right_value: Option<&str>) -> Self {
        Self {
            name: name.into(),
            left_value: left_value.map(str::to_string),
            right_value: right_value.map(str::to_string),
        }
    }

    /// Key exists only in the base document
    pub fn is_left_only(&self) -> bool {
        self.left_value.is_some() && self.right_value.is_none()
    }

    /// Key exists only in the other document
    pub fn is_right_only(&self) -> bool {
        self.left_value.is_none() && self.right_value.is_some()
    }
}

/// Differences found in one block or adaption group
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiffTable {
    /// "Field", "Coding", or the adaption group name
    pub title: String,
    /// Rows ordered by name ascending
    pub rows: Vec<DiffRow>,
}

impl DiffTable {
    /// Package rows as a table, or `None` when there are no rows
    pub fn from_rows(title: impl Into<String>, rows: Vec<DiffRow>) -> Option<Self> {
        if rows.is_empty() {
            return None;
        }
        Some(Self {
            title: title.into(),
            rows,
        })
    }
}

/// The tables one block produced, under that block's heading
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SectionDiff {
    pub kind: BlockKind,
    pub heading: String,
    pub tables: Vec<DiffTable>,
}

impl SectionDiff {
    /// Wrap tables under the kind's heading, or `None` when there are no tables
    pub fn from_tables(kind: BlockKind, tables: Vec<DiffTable>) -> Option<Self> {
        if tables.is_empty() {
            return None;
        }
        Some(Self {
            kind,
            heading: kind.heading().to_string(),
            tables,
        })
    }
}

/// All differences of one ECU
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EcuDiff {
    pub ecu_id: String,
    pub ecu_name: String,
    /// Non-empty sections in block order
    pub sections: Vec<SectionDiff>,
}

impl EcuDiff {
    /// ECU-level heading, e.g. `ECU 0017 - Instruments`
    pub fn heading(&self) -> String {
        format!("ECU {} - {}", self.ecu_id, self.ecu_name)
    }

    /// Tables of all sections, in order
    pub fn tables(&self) -> impl Iterator<Item = &DiffTable> {
        self.sections.iter().flat_map(|s| s.tables.iter())
    }

    pub fn row_count(&self) -> usize {
        self.tables().map(|t| t.rows.len()).sum()
    }
}

/// Source digests of both compared documents
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportIdentity {
    pub base_digest: Option<String>,
    pub other_digest: Option<String>,
}

/// The document-level diff between two snapshots
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiffReport {
    /// Schema version of this structure (always 1)
    pub report_schema_version: u32,
    pub identity: ReportIdentity,
    /// ECUs with at least one difference, in base-snapshot order
    pub ecus: Vec<EcuDiff>,
}

impl DiffReport {
    pub fn new(identity: ReportIdentity, ecus: Vec<EcuDiff>) -> Self {
        Self {
            report_schema_version: REPORT_SCHEMA_VERSION,
            identity,
            ecus,
        }
    }

    /// True when no differences were found
    pub fn is_empty(&self) -> bool {
        self.ecus.is_empty()
    }

    pub fn table_count(&self) -> usize {
        self.ecus.iter().map(|e| e.tables().count()).sum()
    }

    pub fn row_count(&self) -> usize {
        self.ecus.iter().map(EcuDiff::row_count).sum()
    }
}
