use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use wordcloud::article::fetcher::ArticleFetcher;
use wordcloud::config::Config;
use wordcloud::output::terminal;
use wordcloud::pipeline::analyze::{analyze_url, score_text, validate_url};

/// Wordcloud: score the most salient words of a news article.
///
/// Fetches an article, extracts its body text and ranks single words by
/// TF-IDF weight, normalized so the top word weighs 1.0.
#[derive(Parser)]
#[command(name = "wordcloud", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch an article by URL and show its top words
    Analyze {
        /// Absolute http(s) URL of the article
        url: String,

        /// Number of words to return (default: WORDCLOUD_TOP_K or 50)
        #[arg(long)]
        top_k: Option<usize>,

        /// Print the result as JSON instead of a bar chart
        #[arg(long)]
        json: bool,
    },

    /// Score raw text from a file (or stdin) without fetching anything
    Score {
        /// Text file to score; reads stdin when omitted
        file: Option<PathBuf>,

        /// Number of words to return (default: WORDCLOUD_TOP_K or 50)
        #[arg(long)]
        top_k: Option<usize>,

        /// Print the result as JSON instead of a bar chart
        #[arg(long)]
        json: bool,
    },

    /// Serve the HTTP API (POST /analyze)
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on
        #[arg(long, default_value = "8000")]
        port: u16,

        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("wordcloud=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze { url, top_k, json } => {
            let url = validate_url(&url).map_err(anyhow::Error::msg)?.to_string();
            let top_k = top_k.unwrap_or(config.top_k);
            let fetcher = ArticleFetcher::new(config.fetch_options())?;
            let stopwords = Arc::new(config.stopwords());
            let scorer = config.scorer(stopwords);

            let spinner = (!json).then(|| fetch_spinner(&url));
            let result = analyze_url(&fetcher, &scorer, &url, top_k).await;
            if let Some(spinner) = spinner {
                spinner.finish_and_clear();
            }

            match result {
                Ok(analysis) if json => {
                    println!("{}", serde_json::to_string_pretty(&analysis)?);
                }
                Ok(analysis) => terminal::display_keywords(&analysis.url, &analysis.words),
                Err(e) => {
                    terminal::display_failure(&url, &e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Score { file, top_k, json } => {
            let top_k = top_k.unwrap_or(config.top_k);
            let text = read_input(file.as_ref())?;
            let stopwords = Arc::new(config.stopwords());
            let scorer = config.scorer(stopwords);

            info!(chars = text.chars().count(), top_k = top_k, "Scoring text");

            let label = file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "stdin".to_string());

            match score_text(&scorer, &text, top_k) {
                Ok(words) if json => println!("{}", serde_json::to_string_pretty(&words)?),
                Ok(words) => terminal::display_keywords(&label, &words),
                Err(e) => {
                    terminal::display_failure(&label, &e);
                    std::process::exit(1);
                }
            }
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            wordcloud::web::run_server(config, port, &bind).await?;
        }
    }

    Ok(())
}

fn fetch_spinner(url: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("  {spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("Fetching {url}"));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read text from stdin")?;
            Ok(text)
        }
    }
}
