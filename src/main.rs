//! Shortlist CLI entrypoint.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, bail};
use clap::Parser;
use mimalloc::MiMalloc;

use shortlist::config::Config;
use shortlist::document::CandidateDocument;
use shortlist::embedding::{Embedder, SentenceConfig, SharedEmbedder};
use shortlist::extract::{HeadingExtractor, SectionExtractor};
use shortlist::scoring::{RankedCandidate, RelevanceScorer, rank_within};

mod cli;
use cli::{Cli, Commands, RankArgs};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    config.validate()?;

    match cli.command {
        Commands::Rank(args) => run_rank(&config, args).await,
        Commands::Extract { file } => run_extract(&config, &file),
    }
}

async fn run_rank(config: &Config, args: RankArgs) -> anyhow::Result<()> {
    let query = read_query(&args)?;
    let documents = load_documents(&args.paths)?;
    let top_n = args.top_n.unwrap_or(config.top_n);
    let deadline = args
        .timeout_secs
        .map(Duration::from_secs)
        .or(config.rank_timeout);

    let sentence_config = SentenceConfig::from_config(config);
    if sentence_config.testing_stub {
        tracing::warn!("No SHORTLIST_MODEL_PATH configured, running embedder in stub mode");
    }
    let embedder: Arc<dyn Embedder> = Arc::new(SharedEmbedder::new(sentence_config));
    let scorer = RelevanceScorer::from_config(embedder, config);

    tracing::info!(
        documents = documents.len(),
        top_n,
        deadline = ?deadline,
        "Ranking documents"
    );

    let ranked = match deadline {
        Some(deadline) => rank_within(&scorer, &query, &documents, top_n, deadline).await?,
        None => scorer.rank(&query, &documents, top_n)?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
    } else {
        print_table(&ranked);
    }
    Ok(())
}

fn run_extract(config: &Config, file: &Path) -> anyhow::Result<()> {
    let text = fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let extractor = HeadingExtractor::with_min_chars(config.min_section_chars);
    println!("{}", extractor.extract_relevant(&text));
    Ok(())
}

fn read_query(args: &RankArgs) -> anyhow::Result<String> {
    match (&args.query, &args.query_file) {
        (Some(query), _) => Ok(query.clone()),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("failed to read query file {}", path.display())),
        (None, None) => bail!("either --query or --query-file is required"),
    }
}

/// Reads every `.txt` file named directly or found (non-recursively) in a
/// named directory. Directory entries are read in file-name order.
fn load_documents(paths: &[PathBuf]) -> anyhow::Result<Vec<CandidateDocument>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut entries = fs::read_dir(path)
                .with_context(|| format!("failed to list {}", path.display()))?
                .map(|entry| entry.map(|e| e.path()))
                .collect::<Result<Vec<_>, _>>()?;
            entries.retain(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "txt"));
            entries.sort();
            files.extend(entries);
        } else {
            files.push(path.clone());
        }
    }

    files
        .iter()
        .map(|file| {
            let text = fs::read_to_string(file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let identifier = file
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| file.display().to_string());
            Ok(CandidateDocument::new(identifier, text))
        })
        .collect()
}

fn print_table(ranked: &[RankedCandidate]) {
    if ranked.is_empty() {
        println!("No documents to rank.");
        return;
    }

    println!("{:>3}  {:>7}  {:<28}  {:<32}  file", "#", "score", "candidate", "email");
    for (position, candidate) in ranked.iter().enumerate() {
        println!(
            "{:>3}  {:>7.4}  {:<28}  {:<32}  {}",
            position + 1,
            candidate.score,
            candidate.display_name,
            candidate.contact_email.as_deref().unwrap_or("-"),
            candidate.identifier
        );
    }
}
