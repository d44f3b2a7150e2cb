//! Pagination types and traits
//!
//! Defines the inputs of the range calculator and the change-notification
//! seams used by the controller and by `ControllableState`.

use serde::{Deserialize, Serialize};

/// Pages shown on each side of the active page unless configured otherwise
pub const DEFAULT_SIBLINGS: u32 = 1;

/// Pages pinned at each far end unless configured otherwise
pub const DEFAULT_BOUNDARIES: u32 = 1;

/// Inputs of a range computation
///
/// `total` is normalized on construction (negative totals become 0). `active`
/// is kept as given: the caller owns it and re-supplies it on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Total number of pages
    pub total: u32,
    /// Current 1-based page, as supplied by the owner
    pub active: i64,
    /// Pages shown next to the active page on each side
    #[serde(default = "default_siblings")]
    pub siblings: u32,
    /// Pages always shown at each end
    #[serde(default = "default_boundaries")]
    pub boundaries: u32,
}

fn default_siblings() -> u32 {
    DEFAULT_SIBLINGS
}

fn default_boundaries() -> u32 {
    DEFAULT_BOUNDARIES
}

impl PaginationParams {
    /// Create params with default sibling and boundary counts
    pub fn new(total: i64, active: i64) -> Self {
        Self {
            total: normalize_total(total),
            active,
            siblings: DEFAULT_SIBLINGS,
            boundaries: DEFAULT_BOUNDARIES,
        }
    }

    /// Create params from a possibly fractional page total (truncated toward zero)
    pub fn from_fractional_total(total: f64, active: i64) -> Self {
        // `as` saturates and maps NaN to 0
        Self::new(total.trunc() as i64, active)
    }

    /// Set the sibling count
    #[must_use]
    pub fn with_siblings(mut self, siblings: u32) -> Self {
        self.siblings = siblings;
        self
    }

    /// Set the boundary count
    #[must_use]
    pub fn with_boundaries(mut self, boundaries: u32) -> Self {
        self.boundaries = boundaries;
        self
    }

    /// Number of entries a range with ellipses occupies
    pub fn total_slots(&self) -> u64 {
        u64::from(self.siblings) * 2 + 3 + u64::from(self.boundaries) * 2
    }
}

/// Floor a raw page total at 0 and cap it to the page type
fn normalize_total(total: i64) -> u32 {
    u32::try_from(total.max(0)).unwrap_or(u32::MAX)
}

/// Receives the clamped page chosen by a navigation helper
pub trait PageChangeHandler {
    /// Called exactly once per navigation call
    fn on_page_change(&mut self, page: u32);
}

impl<F: FnMut(u32)> PageChangeHandler for F {
    fn on_page_change(&mut self, page: u32) {
        self(page);
    }
}

/// Receives a new value from a `ControllableState`
pub trait ChangeHandler<T> {
    /// Called when the value actually changed
    fn on_change(&mut self, value: &T);
}

impl<T, F: FnMut(&T)> ChangeHandler<T> for F {
    fn on_change(&mut self, value: &T) {
        self(value);
    }
}
