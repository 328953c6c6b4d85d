// src/export/markdown.rs

use crate::export::logic::day_groups;
use crate::models::WorkLogEntry;
use chrono::NaiveDate;
use std::fmt::Write;

/// Render the Markdown flavor of a range export.
/// `entries` must already be sorted by (log_date, updated_at).
pub(crate) fn build_markdown(
    entries: &[WorkLogEntry],
    start: NaiveDate,
    end: NaiveDate,
    include_detail: bool,
) -> String {
    let mut out = String::new();
    out.push_str("# Work log\n\n");
    let _ = writeln!(out, "- Range: {start} ~ {end}");
    let _ = writeln!(
        out,
        "- Generated: {}\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    if entries.is_empty() {
        out.push_str("(no entries in range)\n");
        return out;
    }

    for group in day_groups(entries) {
        let _ = writeln!(out, "## {}", group[0].log_date);
        for entry in group {
            let _ = writeln!(out, "- **{}**", escape_inline(&entry.summary));
            if !include_detail || entry.detail.trim().is_empty() {
                continue;
            }
            let detail = entry.detail.replace('\r', "");
            for line in detail.split('\n') {
                let _ = writeln!(out, "  - {}", escape_inline(line));
            }
        }
        out.push('\n');
    }

    out
}

/// Escape inline Markdown specials. Backslash goes first so already-emitted
/// escapes are not escaped again.
fn escape_inline(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('*', "\\*")
        .replace('_', "\\_")
        .replace('`', "\\`")
}
