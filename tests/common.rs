#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn wl() -> Command {
    cargo_bin_cmd!("worklog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_worklog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Add one entry via the CLI (the store creates the schema on first open)
pub fn add_entry(db_path: &str, date: &str, summary: &str, detail: &str) {
    wl().args([
        "--db", db_path, "--test", "add", summary, "--date", date, "--detail", detail,
    ])
    .assert()
    .success();
}

/// Seed a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    wl().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    add_entry(db_path, "2025-09-01", "Fix login bug", "reproduced\npatched");
    add_entry(db_path, "2025-09-15", "Write release notes", "");
}
