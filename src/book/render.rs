use super::Book;
use crate::error::{BookhoundError, Result};

/// Render a numbered one-line-per-book listing. With `with_score` each line
/// carries the personal score; unrated books show `-/10`.
pub fn book_list(books: &[Book], with_score: bool) -> Vec<String> {
    books
        .iter()
        .enumerate()
        .map(|(i, book)| {
            let line = format!(
                "{}. Title: {}, Authors: {}",
                i + 1,
                book.title(),
                book.authors().join(", ")
            );
            if with_score {
                format!("{}, Score: {}/10", line, format_score(book.score()))
            } else {
                line
            }
        })
        .collect()
}

/// Render the full detail view of the book at `idx` (0-based).
pub fn book_details(books: &[Book], idx: usize) -> Result<String> {
    let book = books.get(idx).ok_or(BookhoundError::InvalidSelection(idx + 1))?;

    Ok(format!(
        "Title: {}\n\
         Authors: {}\n\
         Description: {}\n\
         Categories: {}\n\
         Average Rating: {}\n\
         Page Count: {}\n\
         Score: {}/10\n",
        book.title(),
        book.authors().join(", "),
        book.description(),
        book.categories().join(", "),
        book.average_rating()
            .map_or_else(|| "unknown".to_string(), |r| r.to_string()),
        book.page_count()
            .map_or_else(|| "unknown".to_string(), |c| c.to_string()),
        format_score(book.score()),
    ))
}

fn format_score(score: Option<u8>) -> String {
    score.map_or_else(|| "-".to_string(), |s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(json: &str) -> Book {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_book_list_without_score() {
        let books = vec![book(r#"{"title": "Test Book", "authors": ["Test Author"]}"#)];
        assert_eq!(
            book_list(&books, false),
            vec!["1. Title: Test Book, Authors: Test Author"]
        );
    }

    #[test]
    fn test_book_list_with_score() {
        let books = vec![
            book(r#"{"title": "X", "authors": ["A1", "A2"], "score": 8}"#),
            book(r#"{"title": "Y", "authors": ["B"]}"#),
        ];
        assert_eq!(
            book_list(&books, true),
            vec![
                "1. Title: X, Authors: A1, A2, Score: 8/10",
                "2. Title: Y, Authors: B, Score: -/10",
            ]
        );
    }

    #[test]
    fn test_book_list_numbering_is_one_based() {
        let books = vec![
            book(r#"{"title": "First"}"#),
            book(r#"{"title": "Second"}"#),
            book(r#"{"title": "Third"}"#),
        ];
        let lines = book_list(&books, false);
        assert!(lines[0].starts_with("1. "));
        assert!(lines[2].starts_with("3. "));
    }

    #[test]
    fn test_book_details_renders_all_fields() {
        let books = vec![book(
            r#"{"title": "T", "authors": ["A"], "description": "D",
                "categories": ["C"], "averageRating": 4.5, "pageCount": 100, "score": 7}"#,
        )];
        let details = book_details(&books, 0).unwrap();
        assert!(details.contains("Title: T\n"));
        assert!(details.contains("Authors: A\n"));
        assert!(details.contains("Description: D\n"));
        assert!(details.contains("Categories: C\n"));
        assert!(details.contains("Average Rating: 4.5\n"));
        assert!(details.contains("Page Count: 100\n"));
        assert!(details.contains("Score: 7/10\n"));
    }

    #[test]
    fn test_book_details_defaults_for_absent_fields() {
        let books = vec![book(r#"{"title": "T"}"#)];
        let details = book_details(&books, 0).unwrap();
        assert!(details.contains("Average Rating: unknown\n"));
        assert!(details.contains("Page Count: unknown\n"));
        assert!(details.contains("Score: -/10\n"));
    }

    #[test]
    fn test_book_details_out_of_range() {
        let books = vec![book(r#"{"title": "T"}"#)];
        match book_details(&books, 1) {
            Err(BookhoundError::InvalidSelection(2)) => {}
            other => panic!("expected InvalidSelection, got {:?}", other),
        }
    }
}
