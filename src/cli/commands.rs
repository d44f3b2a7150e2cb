//! CLI commands and argument parsing

use crate::pagination::NavAction;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Pagination range calculator CLI
#[derive(Parser, Debug)]
#[command(name = "pagerange")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Range shape shared by the range-producing subcommands
#[derive(Args, Debug, Clone, Copy)]
pub struct RangeArgs {
    /// Pages shown next to the active page (default from config)
    #[arg(long)]
    pub siblings: Option<u32>,

    /// Pages pinned at each end (default from config)
    #[arg(long)]
    pub boundaries: Option<u32>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the page range for a total and active page
    Range {
        /// Total number of pages (negative totals count as 0)
        #[arg(long, allow_hyphen_values = true)]
        total: i64,

        /// Active page (default from config)
        #[arg(short, long, allow_hyphen_values = true)]
        page: Option<i64>,

        #[command(flatten)]
        shape: RangeArgs,
    },

    /// Apply navigation actions one after another, starting from a page
    Walk {
        /// Total number of pages
        #[arg(long, allow_hyphen_values = true)]
        total: i64,

        /// Starting page (default from config)
        #[arg(short, long, allow_hyphen_values = true)]
        page: Option<i64>,

        #[command(flatten)]
        shape: RangeArgs,

        /// Actions: next, prev, first, last, or a page number
        #[arg(required = true, allow_hyphen_values = true)]
        actions: Vec<NavAction>,
    },

    /// Page count and record window for a listing
    Pages {
        /// Number of records in the listing
        #[arg(long)]
        records: u64,

        /// Records per page (default from config)
        #[arg(long)]
        page_size: Option<u32>,

        /// Page whose record window to show (default from config)
        #[arg(short, long, allow_hyphen_values = true)]
        page: Option<i64>,
    },

    /// Links for every page in the range of a listing URL
    Links {
        /// Listing URL carrying page, search, and sort parameters
        #[arg(long)]
        url: String,

        /// Total number of pages
        #[arg(long, allow_hyphen_values = true)]
        total: i64,

        #[command(flatten)]
        shape: RangeArgs,
    },

    /// Start HTTP server mode
    Serve {
        /// Port to listen on (default from config)
        #[arg(short = 'P', long)]
        port: Option<u16>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Human-readable output
    Pretty,
}
