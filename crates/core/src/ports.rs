use crate::domain::{RankedAuthor, Record};
use crate::error::ExportError;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, ExportError>;

pub trait RecordRepository {
    // Loads every record with field defaults already applied
    fn fetch_all_records(&self) -> Result<Vec<Record>>;
}

/// Trait for picking one author out of the ranked menu
/// `Ok(None)` means the user gave up without choosing (end of input).
pub trait AuthorSelector {
    fn select(&self, ranked: &[RankedAuthor]) -> Result<Option<String>>;
}

/// Trait for writing markdown content
/// This is a port (interface) that defines how the core communicates with output adapters
pub trait MarkdownWriter {
    /// Renders `records` for `author` and returns the path that was written.
    fn write(&self, author: &str, records: &[Record]) -> Result<PathBuf>;
}
