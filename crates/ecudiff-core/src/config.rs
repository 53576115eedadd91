//! Diff options
//!
//! Options are plain data with defaults matching the reference behavior of
//! the tool. They can be loaded from a TOML file:
//!
//! ```toml
//! block_alignment = "positional"
//! report_other_only_binary = true
//! ```

use crate::errors::{EcuDiffError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How base and other ECU blocks are paired
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockAlignment {
    /// Pair the n-th base block of a kind with the n-th other block of that kind
    #[default]
    ByKind,
    /// Pair blocks by list index regardless of kind
    Positional,
}

/// Options controlling a comparison run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiffOptions {
    /// Block pairing strategy
    pub block_alignment: BlockAlignment,

    /// Also report binary-only items that exist only on the other side
    pub report_other_only_binary: bool,
}

impl DiffOptions {
    /// Parse options from TOML text
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the text is not valid TOML or names an
    /// unknown option.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load options from a TOML file
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read, `InvalidConfig` if it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| EcuDiffError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&text)
    }
}
