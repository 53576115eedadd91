//! Backup document loading
//!
//! Turns JSON or XML diagnostic backups into [`Snapshot`]s. Both formats
//! hold the same tree; a single object where a list is expected becomes a
//! single [`Node`], a list becomes a [`Node::Collection`].

pub mod json;
pub mod xml;

use crate::errors::{EcuDiffError, Result};
use crate::model::{Block, BlockKind, Node, Snapshot};
use sha2::{Digest, Sha256};
use std::path::Path;
use std::time::Instant;

pub use json::parse_json_snapshot;
pub use xml::parse_xml_snapshot;

/// On-disk format of a backup document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Xml,
}

impl DocumentFormat {
    /// Detect the format from the file extension (case-insensitive)
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedFormat` for any extension other than `.json`/`.xml`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(DocumentFormat::Json),
            Some("xml") => Ok(DocumentFormat::Xml),
            _ => Err(EcuDiffError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentFormat::Json => "JSON",
            DocumentFormat::Xml => "XML",
        }
    }
}

/// SHA-256 hex digest of document bytes
pub fn source_digest(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Parse document bytes of a known format
///
/// The returned snapshot carries the digest of `bytes`.
///
/// # Errors
///
/// - `InvalidDocument` if the bytes are not valid JSON/XML
/// - `MissingField` if the ECU list or an `ecu_id` is absent
pub fn parse_snapshot(bytes: &[u8], format: DocumentFormat) -> Result<Snapshot> {
    let snapshot = match format {
        DocumentFormat::Json => parse_json_snapshot(bytes)?,
        DocumentFormat::Xml => parse_xml_snapshot(bytes)?,
    };
    Ok(snapshot.with_source_digest(source_digest(bytes)))
}

/// Load a backup document from disk
///
/// # Errors
///
/// - `UnsupportedFormat` if the extension is not `.json` or `.xml`
/// - `Io` if the file cannot be read
/// - `InvalidDocument` / `MissingField` if the content cannot be parsed
pub fn load_snapshot(path: &Path) -> Result<Snapshot> {
    let started = Instant::now();
    let path_str = path.display().to_string();
    crate::log_op_start!("load_snapshot", path = %path_str);

    let result = DocumentFormat::from_path(path).and_then(|format| {
        let bytes = std::fs::read(path).map_err(|e| EcuDiffError::Io {
            path: path_str.clone(),
            reason: e.to_string(),
        })?;
        parse_snapshot(&bytes, format).map_err(|e| e.at_path(&path_str))
    });

    let duration_ms = started.elapsed().as_millis() as u64;
    match &result {
        Ok(snapshot) => {
            crate::log_op_end!(
                "load_snapshot",
                duration_ms = duration_ms,
                path = %path_str,
                ecu_count = snapshot.len()
            );
        }
        Err(err) => {
            crate::log_op_error!(
                "load_snapshot",
                err.clone(),
                duration_ms = duration_ms,
                path = %path_str
            );
        }
    }
    result
}

/// Build a block from its document tag; unknown tags are skipped
fn block_from_tag(tag: Option<&str>, values: Node, ecu_id: &str) -> Option<Block> {
    match tag.and_then(BlockKind::from_tag) {
        Some(kind) => Some(Block::new(kind, values)),
        None => {
            tracing::debug!(
                component = module_path!(),
                ecu_id = ecu_id,
                block_tag = tag.unwrap_or_default(),
                "skipping unsupported block type"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension_is_case_insensitive() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("backup.JSON")).unwrap(),
            DocumentFormat::Json
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("dir/backup.Xml")).unwrap(),
            DocumentFormat::Xml
        );
    }

    #[test]
    fn test_unknown_extension_rejected() {
        for name in ["backup.txt", "backup"] {
            let err = DocumentFormat::from_path(Path::new(name)).unwrap_err();
            assert!(matches!(err, EcuDiffError::UnsupportedFormat { .. }));
        }
    }

    #[test]
    fn test_source_digest_is_sha256_hex() {
        assert_eq!(
            source_digest(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
