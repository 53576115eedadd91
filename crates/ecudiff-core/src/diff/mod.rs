//! ECU configuration diff.
//!
//! Compares two configuration snapshots and produces a structured,
//! deterministic report suitable for rendering.
//!
//! ## Entry point
//!
//! ```ignore
//! use ecudiff_core::{compare, DiffOptions, HtmlRenderer, ReportRenderer};
//!
//! let report = compare(&base, &other, &DiffOptions::default());
//! let html = HtmlRenderer.render(&report)?;
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: members are matched by `display_name`, never by document
//!   order, and rows are ordered by name.
//! - **Pruning**: empty tables, sections and ECUs never appear in the report.
//! - **No silent loss on the base side**: a base key missing from other is
//!   always reported.

pub mod engine;
pub mod model;
pub mod report;

pub use engine::{diff, diff_adaptions};
pub use model::{DiffReport, DiffRow, DiffTable, EcuDiff, ReportIdentity, SectionDiff};
pub use report::compare;
