pub mod entry;

pub use entry::WorkLogEntry;
