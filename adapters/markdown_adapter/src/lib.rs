use notes_core::domain::Record;
use notes_core::error::ExportError;
use notes_core::ports::{MarkdownWriter, Result};
use notes_core::utils::markdown_filename;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Markdown writer adapter implementation
pub struct MarkdownWriterAdapter {
    output_dir: PathBuf,
}

impl MarkdownWriterAdapter {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    /// Formats an author's records into a single markdown document
    pub fn format_markdown(&self, author: &str, records: &[Record]) -> String {
        let mut output = String::new();
        output.push_str(&format!("# {} 的留言 (按时间排序)\n\n", author));

        for (i, record) in records.iter().enumerate() {
            output.push_str(&format!("**时间:** {}\n\n", record.timestamp.as_str()));

            // Blockquote every line of the content
            for line in record.content.trim().split('\n') {
                output.push_str(&format!("> {}\n", line));
            }

            if i + 1 < records.len() {
                output.push_str("\n---\n\n");
            }
        }

        output
    }
}

impl MarkdownWriter for MarkdownWriterAdapter {
    fn write(&self, author: &str, records: &[Record]) -> Result<PathBuf> {
        let file_path = self.output_dir.join(markdown_filename(author));
        let markdown_content = self.format_markdown(author, records);

        fs::write(&file_path, markdown_content).map_err(|e| ExportError::Write {
            path: file_path.clone(),
            source: e,
        })?;
        debug!(path = %file_path.display(), "wrote markdown file");

        Ok(file_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn adapter() -> MarkdownWriterAdapter {
        MarkdownWriterAdapter::new(PathBuf::from("."))
    }

    #[test]
    fn test_format_markdown_layout() {
        let records = vec![
            Record::new("Alice", "2024-01-01", "Yo"),
            Record::new("Alice", "2024-01-02", "Hi"),
        ];
        let expected = "# Alice 的留言 (按时间排序)\n\n\
                        **时间:** 2024-01-01\n\n\
                        > Yo\n\
                        \n---\n\n\
                        **时间:** 2024-01-02\n\n\
                        > Hi\n";
        assert_eq!(adapter().format_markdown("Alice", &records), expected);
    }

    #[test]
    fn test_format_markdown_single_record_has_no_rule() {
        let records = vec![Record::new("Bob", "2024-01-01", "X")];
        let output = adapter().format_markdown("Bob", &records);
        assert!(!output.contains("---"));
        assert!(output.ends_with("> X\n"));
    }

    #[test]
    fn test_multiline_content_round_trips_through_blockquote() {
        let records = vec![Record::new("A", "t", "  line1\nline2\n\nline4  \n")];
        let output = adapter().format_markdown("A", &records);
        let quoted: Vec<&str> = output
            .lines()
            .filter_map(|line| line.strip_prefix("> "))
            .collect();
        assert_eq!(quoted, vec!["line1", "line2", "", "line4"]);
    }

    #[test]
    fn test_write_uses_sanitized_filename() {
        let dir = TempDir::new().unwrap();
        let writer = MarkdownWriterAdapter::new(dir.path().to_path_buf());
        let records = vec![Record::new("A/B*C", "2024-01-01", "content")];

        let path = writer.write("A/B*C", &records).unwrap();
        assert_eq!(path, dir.path().join("ABC.md"));
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# A/B*C 的留言 (按时间排序)\n\n"));
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Alice.md"), "stale").unwrap();
        let writer = MarkdownWriterAdapter::new(dir.path().to_path_buf());

        let path = writer
            .write("Alice", &[Record::new("Alice", "2024-01-01", "fresh")])
            .unwrap();
        let written = fs::read_to_string(path).unwrap();
        assert!(!written.contains("stale"));
        assert!(written.contains("> fresh\n"));
    }

    #[test]
    fn test_write_failure_reports_path() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");
        let writer = MarkdownWriterAdapter::new(missing.clone());

        match writer.write("Alice", &[Record::new("Alice", "", "x")]) {
            Err(ExportError::Write { path, .. }) => assert_eq!(path, missing.join("Alice.md")),
            other => panic!("expected Write error, got {:?}", other),
        }
    }
}
