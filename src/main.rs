//! Wordle Guess API - server binary
//!
//! Serves guess queries over the embedded corpus, backed by the daily
//! past-answers cache.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wordle_guess_api::answers::{AnswerCache, DEFAULT_ANSWERS_URL, ScrapedAnswerSource};
use wordle_guess_api::api::{self, AppState};
use wordle_guess_api::wordlists::{GUESSES, loader};

#[derive(Parser)]
#[command(
    name = "wordle_guess_api",
    about = "Wordle guess query API with a daily-refreshed past-answers cache",
    version,
    author
)]
struct Cli {
    /// Bind address
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// HTTP port
    #[arg(long, default_value = "3000")]
    port: u16,

    /// Path to a custom word list (default: embedded corpus)
    #[arg(short = 'w', long)]
    wordlist: Option<PathBuf>,

    /// URL of the past-answers page
    #[arg(long, default_value = DEFAULT_ANSWERS_URL)]
    answers_url: String,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .init();

    let words = match &cli.wordlist {
        Some(path) => loader::load_from_file(path)?,
        None => loader::words_from_slice(GUESSES),
    };
    anyhow::ensure!(!words.is_empty(), "word list is empty");
    tracing::info!(words = words.len(), "loaded guess corpus");

    let source = ScrapedAnswerSource::new(cli.answers_url)?;
    let state = AppState {
        words: Arc::new(words),
        answers: AnswerCache::new(Arc::new(source)),
    };

    let app = api::router(state);

    let addr = format!("{}:{}", cli.host, cli.port);
    tracing::info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
