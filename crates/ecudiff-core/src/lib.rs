//! ecudiff Core - structural diff of ECU configuration backups
//!
//! This crate compares two diagnostic backups of a vehicle's ECU fleet and
//! reports configuration drift, including:
//! - Typed configuration model (snapshots, ECU records, blocks, nodes)
//! - Structural matcher aligning keyed collections by `display_name`
//! - Diff engine with leaf comparison rules and missing-key policy
//! - Report assembler grouping tables per ECU and section
//! - JSON/XML document loading and HTML/Markdown/JSON rendering

pub mod config;
pub mod diff;
pub mod errors;
pub mod loader;
pub mod logging_facility;
pub mod matcher;
pub mod model;
pub mod render;

pub use ecudiff_core_types as core_types;

// Re-export commonly used types
pub use config::{BlockAlignment, DiffOptions};
pub use diff::{compare, DiffReport};
pub use errors::{EcuDiffError, ExError, ExErrorKind, Result};
pub use loader::load_snapshot;
pub use model::{AdaptionGroup, Block, BlockKind, CodingItem, EcuRecord, Node, Snapshot};
pub use render::{HtmlRenderer, JsonRenderer, MarkdownRenderer, ReportRenderer};
