use std::process::ExitCode;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    Success = 0,
    GeneralError = 1,
    UsageError = 2,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status as u8)
    }
}

#[derive(Error, Debug)]
pub enum BookhoundError {
    #[error("Score must be on a scale of 1 to 10, got {0}")]
    InvalidScore(i64),

    #[error("Invalid selection: {0}")]
    InvalidSelection(usize),

    #[error("No completed books")]
    NoCompletedBooks,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("OPENAI_API_KEY environment variable is not set (required for --recommend)")]
    MissingApiKey,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Recommendation API returned status {status}: {body}")]
    RecommendStatus { status: u16, body: String },

    #[error("Recommendation error: {0}")]
    Recommend(String),

    #[error("User cancelled operation")]
    UserCancelled,
}

impl BookhoundError {
    /// Convert error to appropriate exit status
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            BookhoundError::NoCompletedBooks
            | BookhoundError::MissingApiKey
            | BookhoundError::Config(_) => ExitStatus::UsageError,

            BookhoundError::InvalidScore(_)
            | BookhoundError::InvalidSelection(_)
            | BookhoundError::Io(_)
            | BookhoundError::Json(_)
            | BookhoundError::TomlParse(_)
            | BookhoundError::Catalog(_)
            | BookhoundError::RecommendStatus { .. }
            | BookhoundError::Recommend(_)
            | BookhoundError::UserCancelled => ExitStatus::GeneralError,
        }
    }
}

pub type Result<T> = std::result::Result<T, BookhoundError>;
