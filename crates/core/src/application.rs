use crate::domain::{ExportSummary, RankedAuthor, Record};
use crate::error::{ExportError, UnorderedTimestamps};
use crate::ports::{AuthorSelector, MarkdownWriter, RecordRepository, Result};
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Number of authors offered in the menu
pub const TOP_AUTHOR_LIMIT: usize = 5;

/// Author picked from the menu together with the full, unfiltered dataset
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub author: String,
    pub records: Vec<Record>,
}

/// Counts records per author, in first-encounter order.
pub fn tally_authors(records: &[Record]) -> Vec<RankedAuthor> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut tally: Vec<RankedAuthor> = Vec::new();

    for record in records {
        match positions.get(record.author_name.as_str()) {
            Some(&idx) => tally[idx].count += 1,
            None => {
                positions.insert(record.author_name.as_str(), tally.len());
                tally.push(RankedAuthor {
                    name: record.author_name.clone(),
                    count: 1,
                });
            }
        }
    }

    tally
}

/// The `limit` most frequent authors, most frequent first.
/// Equal counts keep the order in which the authors were first seen.
pub fn top_authors(records: &[Record], limit: usize) -> Vec<RankedAuthor> {
    let mut ranked = tally_authors(records);
    // sort_by is stable
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(limit);
    ranked
}

pub fn filter_by_author(records: &[Record], author: &str) -> Vec<Record> {
    records
        .iter()
        .filter(|record| record.author_name == author)
        .cloned()
        .collect()
}

/// Stable ascending sort on the timestamp string.
///
/// Fails without touching `records` when a malformed timestamp makes the
/// ordering undefined.
pub fn sort_by_timestamp(records: &mut [Record]) -> std::result::Result<(), UnorderedTimestamps> {
    if let Some((index, record)) = records
        .iter()
        .enumerate()
        .find(|(_, record)| record.timestamp.is_malformed())
    {
        return Err(UnorderedTimestamps {
            index,
            value: record.timestamp.as_str().to_string(),
        });
    }

    records.sort_by(|a, b| {
        a.timestamp
            .partial_cmp(&b.timestamp)
            .unwrap_or(Ordering::Equal)
    });
    Ok(())
}

/// Application service driving one load → select → filter → render run
pub struct AuthorExportService {
    repository: Box<dyn RecordRepository>,
    selector: Box<dyn AuthorSelector>,
    markdown_writer: Box<dyn MarkdownWriter>,
    top_limit: usize,
}

impl AuthorExportService {
    /// Creates a new AuthorExportService with the given dependencies
    pub fn new(
        repository: Box<dyn RecordRepository>,
        selector: Box<dyn AuthorSelector>,
        markdown_writer: Box<dyn MarkdownWriter>,
    ) -> Self {
        Self {
            repository,
            selector,
            markdown_writer,
            top_limit: TOP_AUTHOR_LIMIT,
        }
    }

    pub fn with_top_limit(mut self, top_limit: usize) -> Self {
        self.top_limit = top_limit;
        self
    }

    /// Loads the dataset, ranks its authors and asks the selector for one.
    ///
    /// `Ok(None)` when the selector returned without a choice.
    pub fn select_author(&self) -> Result<Option<Selection>> {
        let records = self.repository.fetch_all_records()?;
        info!(records = records.len(), "loaded records");

        let ranked = top_authors(&records, self.top_limit);
        if ranked.is_empty() {
            return Err(ExportError::NoData);
        }
        debug!(authors = ranked.len(), "ranked top authors");

        Ok(self
            .selector
            .select(&ranked)?
            .map(|author| Selection { author, records }))
    }

    /// Filters `records` down to `author`, orders them and writes the document.
    pub fn export(&self, records: &[Record], author: &str) -> Result<ExportSummary> {
        let mut filtered = filter_by_author(records, author);
        if filtered.is_empty() {
            return Err(ExportError::EmptyFilter {
                author: author.to_string(),
            });
        }
        debug!(author, entries = filtered.len(), "filtered records");

        if let Err(e) = sort_by_timestamp(&mut filtered) {
            warn!("sorting by timestamp failed, keeping original order: {}", e);
        }

        let path = self.markdown_writer.write(author, &filtered)?;
        info!(path = %path.display(), entries = filtered.len(), "markdown written");

        Ok(ExportSummary {
            author: author.to_string(),
            path,
            entries: filtered.len(),
        })
    }
}
