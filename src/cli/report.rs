//! Output payloads shared by the CLI runner and the HTTP server

use crate::pagination::{
    page_count, NavAction, PageChangeHandler, PageWindow, PaginationController,
};
use crate::query::{ListingQuery, RangeLink};
use crate::types::{RangeEntry, SortOrder};
use serde::Serialize;

/// A computed range plus the state of its previous/next controls
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeReport {
    pub total: u32,
    pub active: i64,
    pub siblings: u32,
    pub boundaries: u32,
    pub range: Vec<RangeEntry>,
    pub has_previous: bool,
    pub has_next: bool,
}

impl RangeReport {
    /// Snapshot a controller
    pub fn from_controller<H: PageChangeHandler>(controller: &PaginationController<H>) -> Self {
        let params = controller.params();
        Self {
            total: params.total,
            active: params.active,
            siblings: params.siblings,
            boundaries: params.boundaries,
            range: controller.range(),
            has_previous: controller.has_previous(),
            has_next: controller.has_next(),
        }
    }

    /// One-line text form, e.g. `« 1 … 9 [10] 11 … 20 »`
    ///
    /// Disabled previous/next controls render as `·`.
    pub fn render(&self) -> String {
        let mut parts = Vec::with_capacity(self.range.len() + 2);
        parts.push(if self.has_previous { "«" } else { "·" }.to_string());
        for entry in &self.range {
            parts.push(match entry {
                RangeEntry::Page(page) if i64::from(*page) == self.active => format!("[{page}]"),
                other => other.to_string(),
            });
        }
        parts.push(if self.has_next { "»" } else { "·" }.to_string());
        parts.join(" ")
    }
}

/// One step of a `walk`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalkStep {
    pub action: String,
    pub from: i64,
    pub to: i64,
    /// Whether the active page actually moved
    pub changed: bool,
    pub range: Vec<RangeEntry>,
}

impl WalkStep {
    pub fn render(&self) -> String {
        let entries: Vec<String> = self.range.iter().map(ToString::to_string).collect();
        let marker = if self.changed { "->" } else { "==" };
        format!(
            "{:>6}  {} {marker} {}  [{}]",
            self.action,
            self.from,
            self.to,
            entries.join(" ")
        )
    }
}

/// Navigation result for a single action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigateReport {
    pub action: String,
    /// Page passed to the change handler
    pub page: u32,
}

impl NavigateReport {
    pub fn new(action: NavAction, page: u32) -> Self {
        Self {
            action: action.to_string(),
            page,
        }
    }
}

/// Page count and record window of a listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagesReport {
    pub records: u64,
    pub page_count: u32,
    pub window: PageWindow,
}

impl PagesReport {
    pub fn new(records: u64, page_size: u32, page: i64) -> Self {
        Self {
            records,
            page_count: page_count(records, page_size),
            window: PageWindow::new(page, page_size),
        }
    }

    pub fn render(&self) -> String {
        // Pages past the end show an empty window at `records`
        format!(
            "{} records, {} pages; page {} shows records {}..{}",
            self.records,
            self.page_count,
            self.window.page,
            self.window.skip.min(self.records),
            self.window.end().min(self.records)
        )
    }
}

/// Range links for a listing URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinksReport {
    pub query: ListingQuery,
    pub order_by: Vec<(String, SortOrder)>,
    pub total: u32,
    pub links: Vec<RangeLink>,
}

impl LinksReport {
    pub fn render(&self) -> String {
        self.links
            .iter()
            .map(|link| match &link.href {
                Some(href) => format!("{:>6}  {href}", link.entry),
                None => format!("{:>6}", link.entry),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
