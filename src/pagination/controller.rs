//! Navigation controller
//!
//! Wraps a `PaginationParams` snapshot and an optional change handler. The
//! controller never stores a new page: every helper clamps the requested page
//! and hands it to the handler, and the owner re-supplies `active` next time.

use super::range::{clamp_page, compute_range};
use super::types::{PageChangeHandler, PaginationParams};
use crate::error::Error;
use crate::types::RangeEntry;
use std::fmt;
use std::str::FromStr;

/// A navigation request, as named on the command line or in a query string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Next,
    Previous,
    First,
    Last,
    /// Go to a specific (unclamped) page
    Goto(i64),
}

impl FromStr for NavAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "next" => Ok(Self::Next),
            "prev" | "previous" => Ok(Self::Previous),
            "first" => Ok(Self::First),
            "last" => Ok(Self::Last),
            other => other.parse::<i64>().map(Self::Goto).map_err(|_| {
                Error::invalid_param(
                    "action",
                    format!("expected next, prev, first, last or a page number, got '{s}'"),
                )
            }),
        }
    }
}

impl fmt::Display for NavAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Next => f.write_str("next"),
            Self::Previous => f.write_str("prev"),
            Self::First => f.write_str("first"),
            Self::Last => f.write_str("last"),
            Self::Goto(page) => write!(f, "{page}"),
        }
    }
}

/// Controlled pagination over one params snapshot
#[derive(Debug, Clone)]
pub struct PaginationController<H> {
    params: PaginationParams,
    on_change: Option<H>,
}

impl PaginationController<fn(u32)> {
    /// Create a controller without a change handler
    pub fn new(params: PaginationParams) -> Self {
        Self {
            params,
            on_change: None,
        }
    }
}

impl<H: PageChangeHandler> PaginationController<H> {
    /// Create a controller that reports page changes to `handler`
    pub fn with_handler(params: PaginationParams, handler: H) -> Self {
        Self {
            params,
            on_change: Some(handler),
        }
    }

    /// Params this controller was built from
    pub fn params(&self) -> &PaginationParams {
        &self.params
    }

    /// Active page as supplied by the owner (not normalized)
    pub fn active(&self) -> i64 {
        self.params.active
    }

    /// Normalized page total
    pub fn total(&self) -> u32 {
        self.params.total
    }

    /// Display range for the current params
    pub fn range(&self) -> Vec<RangeEntry> {
        compute_range(&self.params)
    }

    /// Whether a "previous" control should be enabled
    pub fn has_previous(&self) -> bool {
        self.params.active != 1
    }

    /// Whether a "next" control should be enabled
    pub fn has_next(&self) -> bool {
        self.params.active != i64::from(self.params.total)
    }

    /// Whether `page` is the active page
    pub fn is_active(&self, page: u32) -> bool {
        i64::from(page) == self.params.active
    }

    /// Clamp `page` into `[1, total]` and notify the handler
    ///
    /// Returns the value passed to the handler.
    pub fn set_page(&mut self, page: i64) -> u32 {
        let clamped = clamp_page(page, self.params.total);
        tracing::debug!(
            requested = page,
            page = clamped,
            total = self.params.total,
            "Page change"
        );

        if let Some(handler) = self.on_change.as_mut() {
            handler.on_page_change(clamped);
        }
        clamped
    }

    /// Go to `active + 1`
    pub fn next(&mut self) -> u32 {
        self.set_page(self.params.active.saturating_add(1))
    }

    /// Go to `active - 1`
    pub fn previous(&mut self) -> u32 {
        self.set_page(self.params.active.saturating_sub(1))
    }

    /// Go to page 1
    pub fn first(&mut self) -> u32 {
        self.set_page(1)
    }

    /// Go to the last page
    pub fn last(&mut self) -> u32 {
        self.set_page(i64::from(self.params.total))
    }

    /// Run one navigation helper
    pub fn apply(&mut self, action: NavAction) -> u32 {
        match action {
            NavAction::Next => self.next(),
            NavAction::Previous => self.previous(),
            NavAction::First => self.first(),
            NavAction::Last => self.last(),
            NavAction::Goto(page) => self.set_page(page),
        }
    }

    /// Release the handler
    pub fn into_handler(self) -> Option<H> {
        self.on_change
    }
}
