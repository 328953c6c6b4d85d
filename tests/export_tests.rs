mod common;
use common::{add_entry, setup_test_db, temp_out, wl};

use chrono::{NaiveDate, TimeZone, Utc};
use std::fs;
use worklog::export::{ExportFormat, render};
use worklog::models::WorkLogEntry;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("date")
}

fn entry(id: i64, date: &str, summary: &str, detail: &str, minute: u32) -> WorkLogEntry {
    let ts = Utc.with_ymd_and_hms(2024, 1, 10, 8, minute, 0).unwrap();
    WorkLogEntry {
        id,
        log_date: d(date),
        summary: summary.to_string(),
        detail: detail.to_string(),
        created_at: ts,
        updated_at: ts,
    }
}

#[test]
fn test_markdown_groups_entries_by_day() {
    let entries = vec![
        entry(1, "2024-01-05", "Task A", "line1\nline2", 0),
        entry(2, "2024-01-05", "Task B", "", 1),
    ];

    let doc = render(&entries, d("2024-01-05"), d("2024-01-05"), ExportFormat::Md, true);

    assert_eq!(doc.matches("## ").count(), 1);
    assert!(doc.contains("## 2024-01-05\n"));
    assert!(doc.contains("- **Task A**\n  - line1\n  - line2\n- **Task B**\n"));
    // No sub-bullets under Task B.
    assert!(!doc.contains("- **Task B**\n  -"));
}

#[test]
fn test_markdown_header_carries_range() {
    let doc = render(&[], d("2024-01-05"), d("2024-01-31"), ExportFormat::Md, false);
    assert!(doc.starts_with("# Work log\n\n"));
    assert!(doc.contains("- Range: 2024-01-05 ~ 2024-01-31\n"));
    assert!(doc.contains("- Generated: "));
}

#[test]
fn test_markdown_empty_range_emits_placeholder() {
    let doc = render(&[], d("2024-01-01"), d("2024-01-31"), ExportFormat::Md, true);
    assert!(doc.contains("(no entries in range)\n"));
    assert!(!doc.contains("## "));
}

#[test]
fn test_markdown_skips_detail_when_not_requested() {
    let entries = vec![entry(1, "2024-01-05", "Task A", "hidden detail", 0)];
    let doc = render(&entries, d("2024-01-05"), d("2024-01-05"), ExportFormat::Md, false);
    assert!(doc.contains("- **Task A**\n"));
    assert!(!doc.contains("hidden detail"));
}

#[test]
fn test_markdown_escapes_inline_specials_backslash_first() {
    let entries = vec![entry(1, "2024-01-05", r"*bold* _x_ `code` \path", "", 0)];
    let doc = render(&entries, d("2024-01-05"), d("2024-01-05"), ExportFormat::Md, false);
    assert!(doc.contains(r"- **\*bold\* \_x\_ \`code\` \\path**"));
}

#[test]
fn test_render_sorts_before_grouping() {
    // Deliberately unsorted input: later day first, and within the first day
    // a newer touch before an older one.
    let mut newer = entry(3, "2024-01-05", "Second touch", "", 30);
    newer.updated_at = Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap();
    let entries = vec![
        entry(1, "2024-01-06", "Next day", "", 0),
        newer,
        entry(2, "2024-01-05", "First touch", "", 0),
    ];

    let doc = render(&entries, d("2024-01-05"), d("2024-01-06"), ExportFormat::Txt, false);
    assert_eq!(
        doc,
        "2024-01-05\n\tFirst touch\n\tSecond touch\n2024-01-06\n\tNext day\n"
    );
}

#[test]
fn test_txt_groups_and_indents() {
    let entries = vec![
        entry(1, "2024-01-05", "Task A", "line1\nline2", 0),
        entry(2, "2024-01-05", "Task B", "", 1),
    ];

    let doc = render(&entries, d("2024-01-05"), d("2024-01-05"), ExportFormat::Txt, true);
    assert_eq!(
        doc,
        "2024-01-05\n\tTask A\n\t\tline1\n\t\tline2\n\tTask B\n"
    );
}

#[test]
fn test_txt_normalizes_tabs_and_blank_detail_lines() {
    let entries = vec![entry(
        1,
        "2024-01-05",
        "A\tsummary\twith\ttabs",
        "kept\r\n\n   \nalso kept\t\r",
        0,
    )];

    let doc = render(&entries, d("2024-01-05"), d("2024-01-05"), ExportFormat::Txt, true);
    assert_eq!(
        doc,
        "2024-01-05\n\tA summary with tabs\n\t\tkept\n\t\talso kept\n"
    );
}

#[test]
fn test_txt_empty_range_has_empty_body() {
    let doc = render(&[], d("2024-01-01"), d("2024-01-31"), ExportFormat::Txt, true);
    assert_eq!(doc, "");
}

#[test]
fn test_export_markdown_via_cli() {
    let db_path = setup_test_db("export_markdown_cli");
    add_entry(&db_path, "2024-01-05", "Task A", "line1\nline2");
    add_entry(&db_path, "2024-01-05", "Task B", "");

    let out = temp_out("export_markdown_cli", "md");

    wl().args([
        "--db", &db_path, "--test", "export", "--format", "md", "--file", &out, "--from",
        "2024-01-01", "--to", "2024-01-31", "--details", "--force",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported markdown");
    assert!(content.contains("## 2024-01-05"));
    assert!(content.contains("- **Task A**"));
    assert!(content.contains("  - line1"));
    assert!(content.contains("- **Task B**"));
    // UTF-8 without BOM.
    assert!(!content.starts_with('\u{feff}'));
}

#[test]
fn test_export_txt_via_cli() {
    let db_path = setup_test_db("export_txt_cli");
    add_entry(&db_path, "2024-01-05", "Task A", "line1\nline2");

    let out = temp_out("export_txt_cli", "txt");

    wl().args([
        "--db", &db_path, "--test", "export", "--format", "txt", "--file", &out, "--from",
        "2024-01-01", "--to", "2024-01-31", "--details", "--force",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported txt");
    assert!(content.contains("2024-01-05\n\tTask A\n\t\tline1\n\t\tline2\n"));
}

#[test]
fn test_export_appends_extension_when_missing() {
    let db_path = setup_test_db("export_ext_append");
    add_entry(&db_path, "2024-01-05", "Task A", "");

    let mut out = std::env::temp_dir();
    out.push("export_ext_append_out");
    let out_str = out.to_string_lossy().to_string();
    fs::remove_file(format!("{out_str}.md")).ok();

    wl().args([
        "--db", &db_path, "--test", "export", "--format", "md", "--file", &out_str, "--from",
        "2024-01-01", "--to", "2024-01-31", "--force",
    ])
    .assert()
    .success();

    assert!(std::path::Path::new(&format!("{out_str}.md")).exists());
}

#[test]
fn test_export_rejects_inverted_range() {
    let db_path = setup_test_db("export_inverted_range");
    add_entry(&db_path, "2024-01-05", "Task A", "");

    let out = temp_out("export_inverted_range", "md");

    wl().args([
        "--db", &db_path, "--test", "export", "--format", "md", "--file", &out, "--from",
        "2024-01-31", "--to", "2024-01-01", "--force",
    ])
    .assert()
    .failure()
    .stderr(predicates::str::contains("before start date"));
}
