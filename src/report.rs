// src/report.rs
//
// Printable HTML report. A standalone document with one table, styled for
// paper; the user prints it to PDF from any browser. Content is exactly
// the visible table state at export time.

use crate::view::ReportTable;

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

const STYLE: &str = "\
body { font-family: -apple-system, 'Segoe UI', Roboto, sans-serif; margin: 24px; color: #111; }
h1 { font-size: 18px; margin: 0 0 2px 0; }
p.meta { font-size: 11px; color: #555; margin: 0 0 12px 0; }
table { border-collapse: collapse; width: 100%; font-size: 11px; }
th, td { border: 1px solid #bbb; padding: 4px 6px; text-align: center; }
th { background: #f0f0f0; }
td.name { text-align: left; }
tr:nth-child(even) td { background: #fafafa; }
@media print { body { margin: 8mm; } table { font-size: 9px; } }";

/// Render the report document. `source` is the loaded file name (or empty).
pub fn build_html(source: &str, table: &ReportTable) -> String {
    let mut doc = String::with_capacity(4096 + table.rows.len() * 256);
    doc.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    doc.push_str("<title>Market Comparison</title>\n<style>\n");
    doc.push_str(STYLE);
    doc.push_str("\n</style>\n</head>\n<body>\n");
    doc.push_str("<h1>Market Comparison</h1>\n");
    if !source.is_empty() {
        doc.push_str(&format!(
            "<p class=\"meta\">Source: {} — {} product(s)</p>\n",
            escape(source),
            table.rows.len()
        ));
    }

    doc.push_str("<table>\n<thead>\n<tr>");
    for h in &table.headers {
        doc.push_str(&format!("<th>{}</th>", escape(h)));
    }
    doc.push_str("</tr>\n</thead>\n<tbody>\n");

    for row in &table.rows {
        doc.push_str("<tr>");
        for (ci, cell) in row.iter().enumerate() {
            if ci == 1 {
                doc.push_str(&format!("<td class=\"name\">{}</td>", escape(cell)));
            } else {
                doc.push_str(&format!("<td>{}</td>", escape(cell)));
            }
        }
        doc.push_str("</tr>\n");
    }

    doc.push_str("</tbody>\n</table>\n</body>\n</html>\n");
    doc
}
