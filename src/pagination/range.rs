//! Range computation
//!
//! Turns `(total, active, siblings, boundaries)` into the ordered list of
//! page numbers and ellipsis markers a pagination control displays.

use super::types::PaginationParams;
use crate::types::RangeEntry;

/// Compute the display range for the given params
///
/// When every page fits in `total_slots()` the full run `1..=total` is
/// returned. Otherwise exactly one of three layouts applies, checked in this
/// order:
///
/// - head run, ellipsis, last `boundaries` pages (active near the start)
/// - first `boundaries` pages, ellipsis, tail run (active near the end)
/// - first `boundaries` pages, ellipsis, siblings around active, ellipsis,
///   last `boundaries` pages
///
/// ```
/// use pagerange::pagination::{compute_range, PaginationParams};
/// use pagerange::RangeEntry::{Ellipsis, Page};
///
/// let range = compute_range(&PaginationParams::new(20, 10));
/// assert_eq!(
///     range,
///     vec![Page(1), Ellipsis, Page(9), Page(10), Page(11), Ellipsis, Page(20)]
/// );
/// ```
pub fn compute_range(params: &PaginationParams) -> Vec<RangeEntry> {
    let total = i64::from(params.total);
    let siblings = i64::from(params.siblings);
    let boundaries = i64::from(params.boundaries);
    let active = params.active;

    let slots = params.total_slots();
    if slots >= u64::from(params.total) {
        return pages(1, total).collect();
    }

    let left_sibling = active.saturating_sub(siblings).max(boundaries);
    let right_sibling = active.saturating_add(siblings).min(total - boundaries);

    let show_left_dots = left_sibling > boundaries + 2;
    let show_right_dots = right_sibling < total - boundaries - 1;

    let mut range = Vec::with_capacity(slots as usize);

    if !show_left_dots && show_right_dots {
        let left_item_count = siblings * 2 + boundaries + 2;
        range.extend(pages(1, left_item_count));
        range.push(RangeEntry::Ellipsis);
        range.extend(pages(total - boundaries + 1, total));
    } else if show_left_dots && !show_right_dots {
        // Tail starts one page before `total - right_item_count + 1` so both
        // edge layouts have the same width.
        let right_item_count = boundaries + 1 + siblings * 2;
        range.extend(pages(1, boundaries));
        range.push(RangeEntry::Ellipsis);
        range.extend(pages(total - right_item_count, total));
    } else {
        range.extend(pages(1, boundaries));
        range.push(RangeEntry::Ellipsis);
        range.extend(pages(left_sibling, right_sibling));
        range.push(RangeEntry::Ellipsis);
        range.extend(pages(total - boundaries + 1, total));
    }

    range
}

/// Clamp a requested page into `[1, total]`
///
/// Non-positive requests go to 1 before the upper bound is checked, so an
/// empty listing (`total == 0`) clamps `0` to `1` but `5` to `0`.
pub fn clamp_page(page: i64, total: u32) -> u32 {
    if page <= 0 {
        1
    } else if page > i64::from(total) {
        total
    } else {
        page as u32
    }
}

/// Inclusive page run; empty when `end < start`. Never yields page 0.
fn pages(start: i64, end: i64) -> impl Iterator<Item = RangeEntry> {
    (start.max(1)..=end).map(|page| RangeEntry::Page(page as u32))
}
