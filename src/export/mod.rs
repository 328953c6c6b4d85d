// src/export/mod.rs

mod fs_utils;
pub mod logic;
mod markdown;
mod txt;

pub use logic::{ExportLogic, render};

use clap::ValueEnum;

/// Target document flavor for a range export.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    #[value(alias = "markdown")]
    Md,
    Txt,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Md => "md",
            ExportFormat::Txt => "txt",
        }
    }

    /// File extension appended when the output path carries none.
    pub fn extension(&self) -> &'static str {
        self.as_str()
    }
}
