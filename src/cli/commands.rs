use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "intelrag",
    about = "Keyword, sparse-vector, LLM and RAG retrieval over synthetic intel reports"
)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate synthetic reports and index them
    Setup {
        /// Number of reports to generate (default from config)
        #[arg(long)]
        num_reports: Option<usize>,
        /// Drop and recreate the index first
        #[arg(long)]
        reset: bool,
    },
    /// Run a query through one of the retrieval strategies
    Search {
        /// The query text
        query: String,
        /// Retrieval mode (lexical, semantic, llm, rag)
        #[arg(long, default_value = "lexical")]
        mode: String,
        /// Date range (all-time, last-30-days, this-year)
        #[arg(long, default_value = "all-time")]
        date_range: String,
        /// Classification filter; repeatable, ALL means no constraint
        #[arg(long = "classification")]
        classifications: Vec<String>,
        /// Source filter; repeatable
        #[arg(long = "source")]
        sources: Vec<String>,
        /// Country filter; repeatable
        #[arg(long = "country")]
        countries: Vec<String>,
        /// Compartment filter; repeatable
        #[arg(long = "compartment")]
        compartments: Vec<String>,
    },
}
