// src/export/txt.rs

use crate::export::logic::day_groups;
use crate::models::WorkLogEntry;
use std::fmt::Write;

/// Render the tab-delimited flavor of a range export: one date line per day
/// group, summaries indented one tab, detail lines two tabs.
/// `entries` must already be sorted by (log_date, updated_at).
pub(crate) fn build_txt(entries: &[WorkLogEntry], include_detail: bool) -> String {
    let mut out = String::new();

    for group in day_groups(entries) {
        let _ = writeln!(out, "{}", group[0].log_date);
        for entry in group {
            let _ = writeln!(out, "\t{}", normalize_tab_text(&entry.summary));

            if !include_detail {
                continue;
            }
            let detail = normalize_tab_text(&entry.detail);
            if detail.is_empty() {
                continue;
            }
            for line in detail.split('\n') {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = writeln!(out, "\t\t{}", line.trim_end());
            }
        }
    }

    out
}

/// Strip carriage returns, replace embedded tabs with single spaces so the
/// column alignment stays stable, and trim surrounding whitespace.
fn normalize_tab_text(text: &str) -> String {
    text.replace('\r', "").replace('\t', " ").trim().to_string()
}
