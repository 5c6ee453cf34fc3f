use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use mindmesh::config::Config;
use mindmesh::keywords::top_keywords;
use mindmesh::normalize::normalizer::Normalizer;
use mindmesh::output::terminal;
use mindmesh::pipeline::analysis::{analyze, cleaned_tokens};
use mindmesh::similarity::cosine_similarity;
use mindmesh::stats::reduction_stats;

/// Mindmesh: deterministic text cleaning and keyword analytics.
///
/// Cleans a document into a normalized token stream and derives keyword
/// frequencies, reduction statistics, and similarity scores from it.
#[derive(Parser)]
#[command(name = "mindmesh", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline: clean, stats, keyword table
    Analyze {
        /// Input file (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Keyword table size (overrides MINDMESH_TOP_KEYWORDS)
        #[arg(long)]
        top: Option<usize>,

        /// Emit the report as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Print only the cleaned text
    Clean {
        /// Input file (reads stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Print the top keyword table
    Keywords {
        /// Input file (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Keyword table size (overrides MINDMESH_TOP_KEYWORDS)
        #[arg(long)]
        top: Option<usize>,

        /// Emit the table as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Print reduction statistics
    Stats {
        /// Input file (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Emit the stats as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Cosine similarity between two cleaned documents
    Compare {
        /// First input file
        file_a: PathBuf,
        /// Second input file
        file_b: PathBuf,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("mindmesh=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let normalizer =
        Normalizer::new(config.stopwords()?).fallback_keeps_digits(config.fallback_keeps_digits);

    match cli.command {
        Commands::Analyze { file, top, json } => {
            let text = read_input(file.as_deref())?;
            let top_n = top.unwrap_or(config.top_keywords);
            let report = analyze(&normalizer, &text, top_n, config.reduction_precision);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                terminal::display_report(&report);
            }
        }

        Commands::Clean { file } => {
            let text = read_input(file.as_deref())?;
            let report = analyze(&normalizer, &text, 0, config.reduction_precision);
            println!("{}", report.cleaned_text);
        }

        Commands::Keywords { file, top, json } => {
            let text = read_input(file.as_deref())?;
            let top_n = top.unwrap_or(config.top_keywords);
            let tokens = cleaned_tokens(&normalizer, &text);
            let keywords = top_keywords(&tokens, top_n);
            if json {
                println!("{}", serde_json::to_string_pretty(&keywords)?);
            } else {
                terminal::display_keywords(&keywords);
            }
        }

        Commands::Stats { file, json } => {
            let text = read_input(file.as_deref())?;
            let tokens = cleaned_tokens(&normalizer, &text);
            let stats = reduction_stats(&text, &tokens, config.reduction_precision);
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                terminal::display_stats(&stats);
            }
        }

        Commands::Compare { file_a, file_b } => {
            let text_a = read_input(Some(&file_a))?;
            let text_b = read_input(Some(&file_b))?;
            let tokens_a = cleaned_tokens(&normalizer, &text_a);
            let tokens_b = cleaned_tokens(&normalizer, &text_b);
            let score = cosine_similarity(&tokens_a, &tokens_b);
            terminal::display_similarity(score);
        }
    }

    Ok(())
}

/// Read the raw document: a plain-text file, or stdin when no path was
/// given. Decoding is lossy — upstream extractors deliver text, not
/// guaranteed-valid UTF-8, and a bad byte should not abort an analysis.
fn read_input(file: Option<&Path>) -> Result<String> {
    let bytes = match file {
        Some(path) => std::fs::read(path)
            .with_context(|| format!("Failed to read input file {}", path.display()))?,
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };
    let text = String::from_utf8_lossy(&bytes).into_owned();
    if text.trim().is_empty() {
        anyhow::bail!(
            "No input text provided.\n\
             Pass a file path or pipe text on stdin."
        );
    }
    Ok(text)
}
