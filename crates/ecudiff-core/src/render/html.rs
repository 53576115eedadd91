//! HTML report renderer.

use crate::diff::model::{DiffReport, DiffRow, DiffTable};
use crate::errors::Result;
use crate::render::ReportRenderer;

const STYLE: &str = r#"<head>
    <meta charset="utf-8">
    <style>
        table {
            font-family: arial, sans-serif;
            border-collapse: collapse;
            width: 100%;
            font-size: 12px;
        }
        h2 {
            color: #2e3280;
            font-size: 16px;
        }
        h1 {
            color: #2e6c80;
            font-size: 20px;
        }
        td, th {
            border: 1px solid #dddddd;
            text-align: left;
            padding: 8px;
        }
        tr:nth-child(even) {
            background-color: #dddddd;
        }
    </style>
</head>
"#;

const LEFT_COLOR: &str = "#00FF00";
const RIGHT_COLOR: &str = "#FF0000";

/// Renders a report as a standalone HTML page
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl ReportRenderer for HtmlRenderer {
    fn render(&self, report: &DiffReport) -> Result<String> {
        let mut out = String::from("<!DOCTYPE html>\n<html>\n");
        out.push_str(STYLE);
        out.push_str("<body>\n");

        for ecu in &report.ecus {
            out.push_str(&format!("<h1>{}:</h1>\n", escape_html(&ecu.heading())));
            for section in &ecu.sections {
                out.push_str(&format!("<h2>{}</h2>\n", escape_html(&section.heading)));
                for table in &section.tables {
                    push_table(&mut out, table);
                }
            }
        }

        out.push_str("</body>\n</html>\n");
        Ok(out)
    }

    fn file_extension(&self) -> &'static str {
        "html"
    }
}

fn push_table(out: &mut String, table: &DiffTable) {
    out.push_str("<table>\n");
    out.push_str(&format!(
        "    <tr>\n        <th>{}</th>\n        <th>Original</th>\n        <th>Other</th>\n    </tr>\n",
        escape_html(&table.title)
    ));
    for row in &table.rows {
        push_row(out, row);
    }
    out.push_str("</table>\n");
}

fn push_row(out: &mut String, row: &DiffRow) {
    out.push_str(&format!(
        "    <tr>\n        <td>{}</td>\n        <td style=\"background-color:{LEFT_COLOR}\">{}</td>\n        <td style=\"background-color:{RIGHT_COLOR}\">{}</td>\n    </tr>\n",
        escape_html(&row.name),
        escape_html(row.left_value.as_deref().unwrap_or_default()),
        escape_html(row.right_value.as_deref().unwrap_or_default()),
    ));
}

/// Escape text for use in element content and attribute values
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
