use chrono::{TimeZone, Utc};
use glob::Pattern;
use std::fs;
use std::path::Path;

/// Get the creation date of a file or directory as an RFC3339 string.
pub fn get_creation_date(metadata: &fs::Metadata) -> Option<String> {
    let created = metadata.created().ok()?;
    let seconds_since_epoch = created.duration_since(std::time::UNIX_EPOCH).ok()?.as_secs() as i64;

    Utc.timestamp_opt(seconds_since_epoch, 0)
        .single()
        .map(|date| date.to_rfc3339())
}

/// Check if a path should be excluded based on a list of glob patterns.
pub fn is_path_excluded(path: &Path, exclude_patterns: &[Pattern]) -> bool {
    let path_str = path.to_string_lossy();
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();

    exclude_patterns
        .iter()
        .any(|pattern| pattern.matches(&path_str) || pattern.matches(&file_name))
}

/// 1-based line number of the byte at `offset` in `content`.
pub fn line_at_offset(content: &[u8], offset: usize) -> usize {
    let end = offset.min(content.len());
    content[..end].iter().filter(|&&b| b == b'\n').count() + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_excluded_by_file_name() {
        let patterns = vec![Pattern::new("*.lock").unwrap()];
        assert!(is_path_excluded(&PathBuf::from("a/b/Cargo.lock"), &patterns));
        assert!(!is_path_excluded(&PathBuf::from("a/b/Cargo.toml"), &patterns));
    }

    #[test]
    fn test_excluded_by_full_path() {
        let patterns = vec![Pattern::new("vendor/*").unwrap()];
        assert!(is_path_excluded(&PathBuf::from("vendor/lib.c"), &patterns));
        assert!(!is_path_excluded(&PathBuf::from("src/lib.c"), &[]));
    }

    #[test]
    fn test_line_at_offset() {
        let content = b"first\nsecond\nthird";
        assert_eq!(line_at_offset(content, 0), 1);
        assert_eq!(line_at_offset(content, 5), 1);
        assert_eq!(line_at_offset(content, 6), 2);
        assert_eq!(line_at_offset(content, 13), 3);
        assert_eq!(line_at_offset(content, 1000), 3);
    }

    #[test]
    fn test_creation_date_is_rfc3339_when_available() {
        let dir = tempfile::tempdir().unwrap();
        let metadata = fs::metadata(dir.path()).unwrap();
        if let Some(date) = get_creation_date(&metadata) {
            assert!(chrono::DateTime::parse_from_rfc3339(&date).is_ok());
        }
    }
}
