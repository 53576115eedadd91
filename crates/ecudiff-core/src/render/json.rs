use crate::diff::model::DiffReport;
use crate::errors::Result;
use crate::render::ReportRenderer;

/// Renders the report as pretty-printed JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl ReportRenderer for JsonRenderer {
    fn render(&self, report: &DiffReport) -> Result<String> {
        let mut out = serde_json::to_string_pretty(report)?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &'static str {
        "json"
    }
}
