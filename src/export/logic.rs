// src/export/logic.rs

use crate::db::WorkLogStore;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_extension, ensure_writable};
use crate::export::markdown::build_markdown;
use crate::export::txt::build_txt;
use crate::models::WorkLogEntry;
use crate::ui::messages::success;
use chrono::NaiveDate;
use std::fs;
use std::path::Path;

/// High-level range export: query, render, write.
pub struct ExportLogic;

impl ExportLogic {
    /// Export all entries with `log_date` in `[start, end]` to `file`.
    ///
    /// Appends the format's extension when `file` has none, asks before
    /// overwriting an existing file unless `force` is set, and creates the
    /// containing directory if missing. The document is written as UTF-8
    /// without a byte-order mark.
    pub fn export(
        store: &WorkLogStore,
        format: ExportFormat,
        file: &str,
        start: NaiveDate,
        end: NaiveDate,
        include_detail: bool,
        force: bool,
    ) -> AppResult<()> {
        let entries = store.get_by_range(start, end)?;

        let path = ensure_extension(Path::new(file), format);
        ensure_writable(&path, force)?;

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let document = render(&entries, start, end, format, include_detail);
        fs::write(&path, document)?;

        success(format!(
            "{} export completed: {}",
            format.as_str(),
            path.display()
        ));
        Ok(())
    }
}

/// Render a complete export document from an entry list.
///
/// Entries are stably sorted by (log_date, updated_at) ascending and
/// partitioned into day groups; the caller is responsible for range
/// validation and for writing the returned string out.
pub fn render(
    entries: &[WorkLogEntry],
    start: NaiveDate,
    end: NaiveDate,
    format: ExportFormat,
    include_detail: bool,
) -> String {
    let mut sorted: Vec<WorkLogEntry> = entries.to_vec();
    sorted.sort_by(|a, b| {
        a.log_date
            .cmp(&b.log_date)
            .then(a.updated_at.cmp(&b.updated_at))
    });

    match format {
        ExportFormat::Md => build_markdown(&sorted, start, end, include_detail),
        ExportFormat::Txt => build_txt(&sorted, include_detail),
    }
}

/// Partition a sorted entry list by calendar day, preserving relative order
/// within each date.
pub(crate) fn day_groups(entries: &[WorkLogEntry]) -> Vec<&[WorkLogEntry]> {
    entries.chunk_by(|a, b| a.log_date == b.log_date).collect()
}
