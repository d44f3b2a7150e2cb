//! # pagerange
//!
//! Pagination range computation for listing UIs: which page numbers and
//! ellipsis markers to show, plus clamp-and-notify navigation helpers.
//!
//! ## Quick Start
//!
//! ```rust
//! use pagerange::pagination::{PaginationController, PaginationParams};
//! use pagerange::RangeEntry::{Ellipsis, Page};
//!
//! let mut requested = None;
//! let mut controller =
//!     PaginationController::with_handler(PaginationParams::new(20, 10), |page: u32| {
//!         requested = Some(page);
//!     });
//!
//! assert_eq!(
//!     controller.range(),
//!     vec![Page(1), Ellipsis, Page(9), Page(10), Page(11), Ellipsis, Page(20)]
//! );
//!
//! controller.next();
//! assert_eq!(requested, Some(11));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │          CLI (range / walk / pages / links / serve)          │
//! └──────────────────────────────────────────────────────────────┘
//!                               │
//! ┌────────────────┬────────────┴───────────┬────────────────────┐
//! │   Pagination   │     Listing Query      │       Config       │
//! ├────────────────┼────────────────────────┼────────────────────┤
//! │ compute_range  │ page / search / sort   │ siblings, bounds   │
//! │ controller     │ page hrefs             │ page size, param   │
//! │ controllable   │ order by               │ server port        │
//! │ page window    │                        │                    │
//! └────────────────┴────────────────────────┴────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types
pub mod types;

/// Range computation and navigation
pub mod pagination;

/// Listing URL query store
pub mod query;

/// YAML configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use config::AppConfig;
pub use pagination::{compute_range, PaginationController, PaginationParams};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
