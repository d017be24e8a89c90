use crate::book::{book_details, book_list};
use crate::catalog;
use crate::cli::prompt_selection;
use crate::error::{BookhoundError, ExitStatus, Result};
use crate::store;
use crate::ui;
use std::path::Path;

/// Search the catalog and browse the results: pick an entry, then mark it as
/// completed with a score or go back. Catalog errors are fatal here.
pub async fn run_browse(query: &str, books_path: &Path) -> Result<ExitStatus> {
    if !ui::is_interactive() {
        return Err(BookhoundError::Config(
            "Interactive mode required for browsing".to_string(),
        ));
    }

    let mut completed = store::load_books(books_path)?;

    let spinner = ui::Spinner::new("Searching the catalog...");
    let books = match catalog::search(query).await {
        Ok(books) => {
            spinner.finish_and_clear();
            books
        }
        Err(e) => {
            spinner.finish_with_error("Catalog search failed");
            return Err(e);
        }
    };

    if books.is_empty() {
        ui::print_info("No books found for that query");
        return Ok(ExitStatus::Success);
    }

    loop {
        ui::print_blank();
        println!("{}", book_list(&books, false).join("\n"));

        let idx = match prompt_selection("Choose a book to see detail of:", books.len())? {
            Some(idx) => idx,
            None => {
                ui::print_error("Invalid input. You must type a book's number");
                continue;
            }
        };

        println!("{}", book_details(&books, idx)?);

        loop {
            println!("1. Mark this book as complete and give it a score\n2. Go back");
            let choice = ui::prompt_text("Choice:")?;
            match choice.trim().parse::<u32>() {
                Ok(1) => {
                    let input = ui::prompt_text("Rate the book on a scale of 1 to 10:")?;
                    let score = match input.trim().parse::<i64>() {
                        Ok(score) => score,
                        Err(_) => {
                            ui::print_error("Invalid input, you must type a score from 1 to 10");
                            continue;
                        }
                    };
                    match books[idx].with_score(score) {
                        Ok(rated) => {
                            completed.push(rated);
                            store::save_books(books_path, &completed)?;
                            ui::print_success(&format!(
                                "Book marked as complete with score {}/10",
                                score
                            ));
                            break;
                        }
                        Err(e) => ui::print_error(&e.to_string()),
                    }
                }
                Ok(2) => break,
                _ => ui::print_error("Type either 1 or 2 to pick an option"),
            }
        }
    }
}
