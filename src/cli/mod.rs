//! CLI argument parsing for gradebook
//!
//! Global flags: --root, --store, --format, --quiet, --verbose, --log-level,
//! --log-json

pub mod args;
pub mod failure;
pub mod format;
pub mod parse;
pub mod paths;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use args::{AddArgs, ImportArgs, ListArgs, ReportArgs};
pub use gradebook_core::format::OutputFormat;
use parse::parse_format;

/// Gradebook - student scores, letter grades and competition ranks
#[derive(Parser, Debug)]
#[command(name = "gradebook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory for resolving the store
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Explicit store root path
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Output format (human, json, records)
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or a full filter directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Write logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new gradebook store
    Init,

    /// Add a student and re-rank
    Add(AddArgs),

    /// Add students from a JSON array file
    Import(ImportArgs),

    /// Delete a student by id and re-rank
    Delete {
        /// Student id
        id: String,
    },

    /// Find students whose id or name matches exactly
    Search {
        /// Student id or name
        key: String,
    },

    /// List students (default: by total, highest first)
    List(ListArgs),

    /// List students whose average is at or above a threshold
    Report(ReportArgs),

    /// Show class statistics
    Stats,

    /// Recompute ranks for every student
    Rank,
}
