//! CLI module
//!
//! Command-line interface for the range calculator.
//!
//! # Commands
//!
//! - `range` - Compute the page range for a total and active page
//! - `walk` - Apply navigation actions and show each transition
//! - `pages` - Page count and record window for a listing
//! - `links` - Page links for a listing URL
//! - `serve` - Start HTTP server mode

mod commands;
mod report;
mod runner;
mod server;

pub use commands::{Cli, Commands, OutputFormat, RangeArgs};
pub use report::{LinksReport, NavigateReport, PagesReport, RangeReport, WalkStep};
pub use runner::Runner;
pub use server::{router, serve};
