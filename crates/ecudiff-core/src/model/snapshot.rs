use crate::model::block::Block;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// ECU Record - one control unit and its configuration blocks
///
/// Blocks keep their original document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcuRecord {
    /// ECU identifier (e.g. "0017")
    pub id: String,

    /// Human-readable ECU name
    pub name: String,

    /// Configuration blocks in document order
    pub blocks: Vec<Block>,
}

impl EcuRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            blocks: Vec::new(),
        }
    }

    /// Append a block, builder style
    pub fn with_block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }
}

/// Configuration Snapshot - all ECU records of one backup, keyed by ECU id
///
/// Iteration is in ascending ECU-identifier order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    ecus: BTreeMap<String, EcuRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source_digest: Option<String>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from records; a repeated ECU id keeps the last record
    pub fn from_records(records: impl IntoIterator<Item = EcuRecord>) -> Self {
        let mut snapshot = Self::new();
        for record in records {
            snapshot.insert(record);
        }
        snapshot
    }

    /// Insert a record, returning the one it replaced
    pub fn insert(&mut self, record: EcuRecord) -> Option<EcuRecord> {
        let replaced = self.ecus.insert(record.id.clone(), record);
        if let Some(previous) = &replaced {
            tracing::warn!(
                component = module_path!(),
                ecu_id = %previous.id,
                "duplicate ECU id, keeping the last record"
            );
        }
        replaced
    }

    /// Attach the digest of the document this snapshot was loaded from
    pub fn with_source_digest(mut self, digest: impl Into<String>) -> Self {
        self.source_digest = Some(digest.into());
        self
    }

    pub fn source_digest(&self) -> Option<&str> {
        self.source_digest.as_deref()
    }

    pub fn get(&self, ecu_id: &str) -> Option<&EcuRecord> {
        self.ecus.get(ecu_id)
    }

    /// ECU records in ascending id order
    pub fn ecus(&self) -> impl Iterator<Item = &EcuRecord> {
        self.ecus.values()
    }

    pub fn len(&self) -> usize {
        self.ecus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ecus.is_empty()
    }
}
