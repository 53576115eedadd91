//! Report renderers
//!
//! Each renderer turns a [`DiffReport`] into a self-contained document.

pub mod html;
pub mod json;
pub mod markdown;

use crate::diff::DiffReport;
use crate::errors::Result;

pub use html::HtmlRenderer;
pub use json::JsonRenderer;
pub use markdown::MarkdownRenderer;

/// Output format of a rendered report
pub trait ReportRenderer {
    /// Render the full report
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if the report cannot be encoded.
    fn render(&self, report: &DiffReport) -> Result<String>;

    /// File extension (without dot) used for default output paths
    fn file_extension(&self) -> &'static str;
}
