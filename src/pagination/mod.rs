//! Pagination module
//!
//! Computes which page numbers and ellipsis markers a pagination control
//! shows, and provides the clamp-and-notify navigation helpers around it.
//!
//! # Overview
//!
//! - [`compute_range`] is a pure function of [`PaginationParams`]
//! - [`PaginationController`] adds `set_page`/`next`/`previous`/`first`/`last`,
//!   which clamp into `[1, total]` and report through a [`PageChangeHandler`]
//! - [`ControllableState`] holds a value that is either owned locally or
//!   supplied by its owner
//! - [`page_count`] and [`PageWindow`] size the record listing behind the pages

mod controllable;
mod controller;
mod range;
mod types;
mod window;

pub use controllable::{ControllableState, ValueSource};
pub use controller::{NavAction, PaginationController};
pub use range::{clamp_page, compute_range};
pub use types::{
    ChangeHandler, PageChangeHandler, PaginationParams, DEFAULT_BOUNDARIES, DEFAULT_SIBLINGS,
};
pub use window::{page_count, PageWindow, DEFAULT_PAGE_SIZE};
