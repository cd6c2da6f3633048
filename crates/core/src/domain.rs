use std::cmp::Ordering;
use std::path::PathBuf;

/// Author name used when a record carries no `authorName`.
pub const UNKNOWN_AUTHOR: &str = "N/A";

/// Content used when a record carries no `content`.
pub const MISSING_CONTENT: &str = "无内容";

/// Timestamp of a record, compared lexically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timestamp {
    /// A string timestamp, or `""` when the field was absent.
    Text(String),
    /// A non-string JSON value. Rendered as-is but never ordered.
    Malformed(String),
}

impl Timestamp {
    pub fn as_str(&self) -> &str {
        match self {
            Timestamp::Text(s) | Timestamp::Malformed(s) => s,
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Timestamp::Malformed(_))
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Timestamp::Text(String::new())
    }
}

impl PartialOrd for Timestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Timestamp::Text(a), Timestamp::Text(b)) => Some(a.cmp(b)),
            _ if self == other => Some(Ordering::Equal),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub author_name: String,
    pub timestamp: Timestamp,
    pub content: String,
}

impl Record {
    pub fn new(author_name: impl Into<String>, timestamp: &str, content: impl Into<String>) -> Self {
        Self {
            author_name: author_name.into(),
            timestamp: Timestamp::Text(timestamp.to_string()),
            content: content.into(),
        }
    }
}

/// One entry of the author menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedAuthor {
    pub name: String,
    pub count: usize,
}

/// Outcome of a successful export
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSummary {
    pub author: String,
    pub path: PathBuf,
    pub entries: usize,
}
