use crate::config::{self, RecommendConfig};
use crate::error::{ExitStatus, Result};
use crate::recommend;
use crate::store;
use crate::ui;
use std::path::Path;

/// Ask the chat-completion API for recommendations based on the completed
/// list. A missing API key is fatal; an HTTP failure from the API is reported
/// and the process exits normally.
pub async fn run_recommend(books_path: &Path, config: &RecommendConfig) -> Result<ExitStatus> {
    let api_key = config::api_key_from_env()?;

    let completed = store::load_books(books_path)?;
    if completed.is_empty() {
        ui::print_info("You have no completed books to base recommendations on");
        return Ok(ExitStatus::Success);
    }

    let spinner = ui::Spinner::new("Asking for recommendations...");
    let result = recommend::recommend(&completed, &api_key, config).await;
    spinner.finish_and_clear();

    match result {
        Ok(text) => {
            ui::print_success("Recommendations:");
            println!("{}", text);
            Ok(ExitStatus::Success)
        }
        Err(e) => {
            ui::print_error(&format!("Recommendation request failed: {}", e));
            Ok(ExitStatus::Success)
        }
    }
}
