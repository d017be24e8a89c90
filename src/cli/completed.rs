use crate::book::{book_details, book_list};
use crate::cli::prompt_selection;
use crate::error::{BookhoundError, ExitStatus, Result};
use crate::store;
use crate::ui;
use std::path::Path;

/// Browse the completed-books list: pick an entry, then delete it, update its
/// score, or go back. Every mutation rewrites the whole file.
pub fn run_completed(books_path: &Path) -> Result<ExitStatus> {
    if !ui::is_interactive() {
        return Err(BookhoundError::Config(
            "Interactive mode required for browsing".to_string(),
        ));
    }

    let mut books = store::load_books(books_path)?;
    if books.is_empty() {
        return Err(BookhoundError::NoCompletedBooks);
    }

    loop {
        ui::print_blank();
        println!("{}", book_list(&books, true).join("\n"));

        let idx = match prompt_selection("Choose a book to see detail of:", books.len())? {
            Some(idx) => idx,
            None => {
                ui::print_error("Invalid input. You must type a book's number");
                continue;
            }
        };

        println!("{}", book_details(&books, idx)?);

        loop {
            println!("1. Delete this book from your list\n2. Update your score\n3. Go back");
            let choice = ui::prompt_text("Choice:")?;
            match choice.trim().parse::<u32>() {
                Ok(1) => {
                    let removed = books.remove(idx);
                    store::save_books(books_path, &books)?;
                    ui::print_success(&format!(
                        "{} successfully removed from the list",
                        removed.title()
                    ));
                    break;
                }
                Ok(2) => {
                    let input = ui::prompt_text("New score:")?;
                    let score = match input.trim().parse::<i64>() {
                        Ok(score) => score,
                        Err(_) => {
                            ui::print_error(
                                "Invalid input, you must type the book's updated score",
                            );
                            continue;
                        }
                    };
                    match books[idx].with_score(score) {
                        Ok(updated) => {
                            let title = updated.title().to_string();
                            books[idx] = updated;
                            store::save_books(books_path, &books)?;
                            ui::print_success(&format!(
                                "{} successfully updated to {}/10",
                                title, score
                            ));
                        }
                        Err(e) => ui::print_error(&e.to_string()),
                    }
                }
                Ok(3) => break,
                _ => ui::print_error("Type either 1, 2 or 3 to pick an option"),
            }
        }

        if books.is_empty() {
            ui::print_info("Your completed list is now empty");
            return Ok(ExitStatus::Success);
        }
    }
}
