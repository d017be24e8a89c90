mod render;

pub use render::{book_details, book_list};

use crate::error::{BookhoundError, Result};
use serde::{Deserialize, Serialize};

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 10;

/// Loosely-typed shape of a catalog `volumeInfo` object or a persisted entry.
/// Optional fields get placeholder defaults here; validation happens when
/// converting into a `Book`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBook {
    pub title: String,
    #[serde(default = "default_authors")]
    pub authors: Vec<String>,
    #[serde(default = "default_description")]
    pub description: String,
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub page_count: Option<u32>,
    #[serde(default)]
    pub score: Option<i64>,
}

fn default_authors() -> Vec<String> {
    vec!["Unknown author".to_string()]
}

fn default_description() -> String {
    "No description".to_string()
}

fn default_categories() -> Vec<String> {
    vec!["No categories".to_string()]
}

/// One catalog entry or personal reading entry. Immutable once validated;
/// score updates go through [`Book::with_score`], which re-runs validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawBook")]
pub struct Book {
    title: String,
    authors: Vec<String>,
    description: String,
    categories: Vec<String>,
    average_rating: Option<f64>,
    page_count: Option<u32>,
    score: Option<u8>,
}

impl TryFrom<RawBook> for Book {
    type Error = BookhoundError;

    fn try_from(raw: RawBook) -> Result<Book> {
        let score = match raw.score {
            None => None,
            Some(v) if (MIN_SCORE as i64..=MAX_SCORE as i64).contains(&v) => Some(v as u8),
            Some(v) => return Err(BookhoundError::InvalidScore(v)),
        };

        Ok(Book {
            title: raw.title,
            authors: raw.authors,
            description: raw.description,
            categories: raw.categories,
            average_rating: raw.average_rating,
            page_count: raw.page_count,
            score,
        })
    }
}

impl Book {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn average_rating(&self) -> Option<f64> {
        self.average_rating
    }

    pub fn page_count(&self) -> Option<u32> {
        self.page_count
    }

    pub fn score(&self) -> Option<u8> {
        self.score
    }

    /// Build a new record with the given score, re-validating through the
    /// same constructor. The original book is left untouched.
    pub fn with_score(&self, score: i64) -> Result<Book> {
        Book::try_from(RawBook {
            title: self.title.clone(),
            authors: self.authors.clone(),
            description: self.description.clone(),
            categories: self.categories.clone(),
            average_rating: self.average_rating,
            page_count: self.page_count,
            score: Some(score),
        })
    }
}
