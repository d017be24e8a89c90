mod browse;
mod completed;
mod recommend_cmd;

pub use browse::run_browse;
pub use completed::run_completed;
pub use recommend_cmd::run_recommend;

use crate::error::Result;
use crate::ui;
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bookhound")]
#[command(author, version, about = "Browse books, track completed reads, get recommendations")]
#[command(group = ArgGroup::new("mode").required(true).args(["title", "author", "completed", "recommend"]))]
pub struct Cli {
    /// Search the catalog by title
    #[arg(short, long, value_name = "QUERY")]
    pub title: Option<String>,

    /// Search the catalog by author
    #[arg(short, long, value_name = "QUERY")]
    pub author: Option<String>,

    /// Browse your completed books
    #[arg(short, long)]
    pub completed: bool,

    /// Get recommendations based on your completed books (requires OPENAI_API_KEY)
    #[arg(short, long)]
    pub recommend: bool,

    /// Use an alternate completed-books file
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Increase log verbosity (can repeat: -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Log format: text (default) or json
    #[arg(long, value_name = "FORMAT")]
    pub log_format: Option<String>,
}

pub enum Mode {
    Title(String),
    Author(String),
    Completed,
    Recommend,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if let Some(query) = &self.title {
            Mode::Title(query.clone())
        } else if let Some(query) = &self.author {
            Mode::Author(query.clone())
        } else if self.completed {
            Mode::Completed
        } else {
            // the arg group guarantees one mode flag is present
            Mode::Recommend
        }
    }
}

/// Read a 1-based selection from the user and map it to a valid 0-based
/// index, or `None` for non-numeric or out-of-range input.
fn prompt_selection(message: &str, len: usize) -> Result<Option<usize>> {
    let input = ui::prompt_text(message)?;
    match input.trim().parse::<usize>() {
        Ok(n) if (1..=len).contains(&n) => Ok(Some(n - 1)),
        _ => Ok(None),
    }
}
