//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::commands::{
    completions::CompletionsArgs, inspect::InspectArgs, query::QueryArgs,
};

#[derive(Parser)]
#[command(name = "neotrace")]
#[command(author, version, about = "Explore close approaches of near-Earth objects")]
#[command(
    long_about = "Load NASA's near-Earth object catalog and close approach data, \
link them in memory, and inspect single objects or query their approaches with filters."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Path to the CSV file of near-Earth objects
    #[arg(long, global = true, default_value = "data/neos.csv")]
    pub neofile: PathBuf,

    /// Path to the JSON file of close approach data
    #[arg(long, global = true, default_value = "data/cad.json")]
    pub cadfile: PathBuf,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Report catalog sizes while loading
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect a single NEO by designation or name
    Inspect(InspectArgs),

    /// Query close approaches with filters
    Query(QueryArgs),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}
