//! Page window math for record listings

use serde::Serialize;

/// Records per listing page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: u32 = 15;

/// Number of pages needed for `record_count` records
///
/// A zero page size is treated as 1.
pub fn page_count(record_count: u64, page_size: u32) -> u32 {
    let pages = record_count.div_ceil(u64::from(page_size.max(1)));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// The slice of records shown on one page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    /// 1-based page number
    pub page: u32,
    /// Records per page
    pub page_size: u32,
    /// Records before this page
    pub skip: u64,
    /// Records on this page (at most)
    pub take: u32,
}

impl PageWindow {
    /// Window for `page`, floored at page 1
    pub fn new(page: i64, page_size: u32) -> Self {
        let page = u32::try_from(page.max(1)).unwrap_or(u32::MAX);
        let page_size = page_size.max(1);
        Self {
            page,
            page_size,
            skip: u64::from(page - 1) * u64::from(page_size),
            take: page_size,
        }
    }

    /// Index one past the last record of the window
    pub fn end(&self) -> u64 {
        self.skip + u64::from(self.take)
    }

    /// Whether the record at `index` (0-based) falls on this page
    pub fn contains(&self, index: u64) -> bool {
        (self.skip..self.end()).contains(&index)
    }
}
