mod book;
mod catalog;
mod cli;
mod config;
mod error;
mod recommend;
mod store;
mod ui;

use clap::Parser;
use cli::{Cli, Mode};
use error::{BookhoundError, ExitStatus};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    ui::set_quiet_mode(cli.quiet);
    setup_logging(cli.verbose, cli.quiet, cli.log_format.as_deref());

    let result = run_command(cli).await;

    match result {
        Ok(status) => status.into(),
        Err(e) => {
            ui::print_error(&e.to_string());
            e.exit_status().into()
        }
    }
}

async fn run_command(cli: Cli) -> Result<ExitStatus, BookhoundError> {
    let config = config::load_config()?;
    let books_path = config::books_path(&config, cli.file.as_deref())?;

    match cli.mode() {
        Mode::Title(query) => cli::run_browse(&format!("intitle:{}", query), &books_path).await,
        Mode::Author(query) => cli::run_browse(&format!("inauthor:{}", query), &books_path).await,
        Mode::Completed => cli::run_completed(&books_path),
        Mode::Recommend => cli::run_recommend(&books_path, &config.recommend).await,
    }
}

fn setup_logging(verbose: u8, quiet: bool, format: Option<&str>) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match format {
        Some("json") => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().without_time().with_target(false))
                .init();
        }
    }
}
