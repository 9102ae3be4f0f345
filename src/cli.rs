use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "shortlist",
    about = "Rank candidate resumes against a job description",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank plain-text documents against a query
    Rank(RankArgs),

    /// Print the section text that would be embedded for a document
    Extract {
        /// Path to a plain-text document
        file: PathBuf,
    },
}

#[derive(Args)]
pub struct RankArgs {
    /// Query text (job description or recruiter question)
    #[arg(short, long, conflicts_with = "query_file")]
    pub query: Option<String>,

    /// Read the query from a file
    #[arg(long)]
    pub query_file: Option<PathBuf>,

    /// Document files (.txt) or directories of them
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Number of candidates to return (defaults to SHORTLIST_TOP_N)
    #[arg(short = 'n', long)]
    pub top_n: Option<usize>,

    /// Emit the ranking as JSON
    #[arg(long)]
    pub json: bool,

    /// Abort if ranking takes longer than this (defaults to SHORTLIST_RANK_TIMEOUT_SECS)
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}
