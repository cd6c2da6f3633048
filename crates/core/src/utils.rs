/// Stem used when an author name leaves nothing usable for a filename
pub const DEFAULT_FILE_STEM: &str = "filtered_author_data";

const FORBIDDEN_FILENAME_CHARS: [char; 9] = ['\\', '/', '*', '?', ':', '"', '<', '>', '|'];

/// Sanitizes an author name for use in a filename
/// Drops characters invalid on common filesystems and turns spaces into underscores
pub fn sanitize_filename(name: &str) -> String {
    let stripped: String = name
        .chars()
        .filter(|c| !FORBIDDEN_FILENAME_CHARS.contains(c))
        .collect();

    let trimmed = stripped.trim();
    if trimmed.is_empty() || trimmed == "." {
        return DEFAULT_FILE_STEM.to_string();
    }

    stripped.replace(' ', "_")
}

/// Output filename (with `.md` extension) for an author
pub fn markdown_filename(author: &str) -> String {
    format!("{}.md", sanitize_filename(author))
}
