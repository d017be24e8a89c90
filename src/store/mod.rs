use crate::book::Book;
use crate::error::Result;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load the completed-books list. A missing file or a file that is not valid
/// JSON yields an empty list; a structurally valid file holding an invalid
/// record (e.g. an out-of-range score) is an error.
pub fn load_books(path: &Path) -> Result<Vec<Book>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    let value: serde_json::Value = match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "completed-books file is not valid JSON, starting empty");
            return Ok(Vec::new());
        }
    };

    let books: Vec<Book> = serde_json::from_value(value)?;
    tracing::debug!(path = %path.display(), count = books.len(), "loaded completed books");
    Ok(books)
}

/// Rewrite the whole list to disk, pretty-printed with 4-space indentation.
/// Not atomic; a crash mid-write can leave a truncated file.
pub fn save_books(path: &Path, books: &[Book]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    books.serialize(&mut ser)?;

    fs::write(path, buf)?;
    tracing::debug!(path = %path.display(), count = books.len(), "saved completed books");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BookhoundError;
    use tempfile::tempdir;

    fn book(json: &str) -> Book {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("completed_books.json");
        assert!(load_books(&path).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_json_loads_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("completed_books.json");
        fs::write(&path, "{not json").unwrap();
        assert!(load_books(&path).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_score_in_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("completed_books.json");
        fs::write(&path, r#"[{"title": "T", "score": 42}]"#).unwrap();
        match load_books(&path) {
            Err(BookhoundError::Json(_)) => {}
            other => panic!("expected Json error, got {:?}", other.map(|b| b.len())),
        }
    }

    #[test]
    fn test_save_load_roundtrip_preserves_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("completed_books.json");

        let books = vec![
            book(r#"{"title": "A", "authors": ["X"], "score": 3}"#),
            book(r#"{"title": "B", "score": 10}"#),
            book(r#"{"title": "C", "averageRating": 4.2, "pageCount": 99}"#),
        ];
        save_books(&path, &books).unwrap();

        let loaded = load_books(&path).unwrap();
        assert_eq!(loaded, books);
    }

    #[test]
    fn test_save_uses_four_space_indent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("completed_books.json");
        save_books(&path, &[book(r#"{"title": "T"}"#)]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\n    {"));
        assert!(content.contains("\n        \"title\": \"T\""));
    }

    #[test]
    fn test_delete_preserves_relative_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("completed_books.json");

        let mut books = vec![
            book(r#"{"title": "A"}"#),
            book(r#"{"title": "B"}"#),
            book(r#"{"title": "C"}"#),
        ];
        save_books(&path, &books).unwrap();

        books.remove(1);
        save_books(&path, &books).unwrap();

        let loaded = load_books(&path).unwrap();
        let titles: Vec<&str> = loaded.iter().map(|b| b.title()).collect();
        assert_eq!(titles, ["A", "C"]);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("dir").join("books.json");
        save_books(&path, &[]).unwrap();
        assert!(path.exists());
    }
}
