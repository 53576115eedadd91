//! Markdown summary renderer for diff reports.

use crate::diff::model::{DiffReport, DiffTable};
use crate::errors::Result;
use crate::render::ReportRenderer;

/// Renders a review-friendly Markdown summary
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl ReportRenderer for MarkdownRenderer {
    fn render(&self, report: &DiffReport) -> Result<String> {
        let mut out = String::new();

        out.push_str("## ECU Configuration Diff\n\n");

        // Identity
        out.push_str(&format!(
            "| | Source Digest |\n\
             |---|---|\n\
             | Original | `{}` |\n\
             | Other | `{}` |\n\n",
            short(report.identity.base_digest.as_deref()),
            short(report.identity.other_digest.as_deref()),
        ));

        if report.is_empty() {
            out.push_str("_No differences detected._\n");
            return Ok(out);
        }

        out.push_str(&format!(
            "**ECUs**: {}  \n**Tables**: {}  \n**Rows**: {}\n\n",
            report.ecus.len(),
            report.table_count(),
            report.row_count()
        ));

        for ecu in &report.ecus {
            out.push_str(&format!("## {}\n\n", ecu.heading()));
            for section in &ecu.sections {
                out.push_str(&format!("### {}\n\n", section.heading));
                for table in &section.tables {
                    push_table(&mut out, table);
                }
            }
        }

        Ok(out)
    }

    fn file_extension(&self) -> &'static str {
        "md"
    }
}

fn push_table(out: &mut String, table: &DiffTable) {
    out.push_str(&format!("| {} | Original | Other |\n", cell(&table.title)));
    out.push_str("|---|---|---|\n");
    for row in &table.rows {
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            cell(&row.name),
            cell(row.left_value.as_deref().unwrap_or_default()),
            cell(row.right_value.as_deref().unwrap_or_default()),
        ));
    }
    out.push('\n');
}

/// Pipes would split the cell
fn cell(text: &str) -> String {
    text.replace('|', "\\|")
}

fn short(digest: Option<&str>) -> &str {
    match digest {
        Some(d) => d.char_indices().nth(12).map_or(d, |(end, _)| &d[..end]),
        None => "-",
    }
}
