use notes_core::domain::{Record, Timestamp, MISSING_CONTENT, UNKNOWN_AUTHOR};
use notes_core::error::ExportError;
use notes_core::ports::{RecordRepository, Result};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the dataset file looked up in the base directory
pub const DATA_FILE_NAME: &str = "data.json";

/// One array element as found on disk, every field optional
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "authorName", default)]
    author_name: Option<Value>,
    #[serde(default)]
    timestamp: Option<Value>,
    #[serde(default)]
    content: Option<Value>,
}

impl RawRecord {
    fn into_record(self) -> Record {
        Record {
            author_name: text_or(self.author_name, UNKNOWN_AUTHOR),
            timestamp: match self.timestamp {
                None => Timestamp::default(),
                Some(Value::String(s)) => Timestamp::Text(s),
                Some(other) => Timestamp::Malformed(other.to_string()),
            },
            content: text_or(self.content, MISSING_CONTENT),
        }
    }
}

// Strings are taken verbatim, other JSON values as their compact text
fn text_or(value: Option<Value>, default: &str) -> String {
    match value {
        None => default.to_string(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    }
}

/// JSON file implementation of the RecordRepository trait
pub struct JsonRecordRepository {
    base_dir: PathBuf,
}

impl JsonRecordRepository {
    /// Creates a repository reading `data.json` from `base_dir`
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn data_path(&self) -> PathBuf {
        self.base_dir.join(DATA_FILE_NAME)
    }

    fn parse(path: &Path, text: &str) -> Result<Vec<Record>> {
        let raw: Vec<RawRecord> = serde_json::from_str(text).map_err(|e| {
            debug!(path = %path.display(), "invalid json: {}", e);
            ExportError::Parse {
                path: path.to_path_buf(),
                detail: e.to_string(),
            }
        })?;

        Ok(raw.into_iter().map(RawRecord::into_record).collect())
    }
}

impl RecordRepository for JsonRecordRepository {
    fn fetch_all_records(&self) -> Result<Vec<Record>> {
        let path = self.data_path();

        let text = fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ExportError::NotFound {
                dir: self.base_dir.clone(),
            },
            _ => ExportError::Unknown {
                path: path.clone(),
                source: e,
            },
        })?;

        let records = Self::parse(&path, &text)?;
        debug!(path = %path.display(), records = records.len(), "parsed dataset");
        Ok(records)
    }
}
