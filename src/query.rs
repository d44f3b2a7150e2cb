//! Listing query store
//!
//! A record listing keeps its state in the URL: `page`, `search`, and `sort`
//! query parameters. This module reads that state and writes page changes
//! back by rewriting the `page` parameter, leaving everything else intact.

use crate::error::{Error, Result};
use crate::types::{RangeEntry, SortOrder};
use serde::{Deserialize, Serialize};
use url::Url;

/// Query parameter holding the active page
pub const PAGE_PARAM: &str = "page";

/// Query parameter holding the search term
pub const SEARCH_PARAM: &str = "search";

/// Query parameter holding the JSON sort rules
pub const SORT_PARAM: &str = "sort";

/// Page used when the URL has no page parameter
pub const DEFAULT_PAGE: u32 = 1;

/// Column the listing is ordered by when no sort rules are given
pub const DEFAULT_SORT_FIELD: &str = "name";

/// One table sorting rule, as serialized into the `sort` parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortRule {
    /// Column id
    pub id: String,
    /// Descending when true
    #[serde(default)]
    pub desc: bool,
}

/// Listing state read from a URL
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ListingQuery {
    /// Requested page, not yet clamped to the page total
    pub page: i64,
    /// Name filter passed through to the record source
    pub search: String,
    /// Sorting rules in priority order
    pub sort: Vec<SortRule>,
}

impl ListingQuery {
    /// Read listing state using the standard `page` parameter
    pub fn from_url(url: &Url) -> Result<Self> {
        Self::from_url_with_param(url, PAGE_PARAM, DEFAULT_PAGE)
    }

    /// Read listing state, taking the active page from `page_param`
    ///
    /// `default_page` is used when the parameter is absent.
    pub fn from_url_with_param(url: &Url, page_param: &str, default_page: u32) -> Result<Self> {
        let page = match query_value(url, page_param) {
            Some(raw) => raw.trim().parse::<i64>().map_err(|e| {
                Error::invalid_param(page_param, format!("expected an integer, got '{raw}': {e}"))
            })?,
            None => i64::from(default_page),
        };

        let search = query_value(url, SEARCH_PARAM).unwrap_or_default();

        let sort = match query_value(url, SORT_PARAM) {
            Some(raw) if !raw.trim().is_empty() => parse_sort(&raw)?,
            _ => Vec::new(),
        };

        Ok(Self { page, search, sort })
    }

    /// Resolve sort rules into `(field, order)` pairs
    ///
    /// Fields keep the position of their first rule; a repeated field takes
    /// the direction of its last rule. No rules means `name asc`.
    pub fn order_by(&self) -> Vec<(String, SortOrder)> {
        if self.sort.is_empty() {
            return vec![(DEFAULT_SORT_FIELD.to_string(), SortOrder::Asc)];
        }

        let mut order: Vec<(String, SortOrder)> = Vec::with_capacity(self.sort.len());
        for rule in &self.sort {
            let direction = SortOrder::from_desc(rule.desc);
            match order.iter_mut().find(|(field, _)| *field == rule.id) {
                Some(existing) => existing.1 = direction,
                None => order.push((rule.id.clone(), direction)),
            }
        }
        order
    }
}

/// Parse the JSON sort rules from the `sort` parameter
pub fn parse_sort(raw: &str) -> Result<Vec<SortRule>> {
    serde_json::from_str(raw).map_err(|e| {
        Error::invalid_param(SORT_PARAM, format!("expected a JSON array of {{id, desc}}: {e}"))
    })
}

/// Copy of `url` with `param` set to `page`
///
/// Existing parameters keep their order. The first occurrence of `param` is
/// replaced in place and later duplicates are dropped; a missing parameter
/// is appended.
pub fn page_href(url: &Url, param: &str, page: u32) -> Url {
    let page = page.to_string();
    let mut replaced = false;
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .filter_map(|(key, value)| {
            if key != param {
                return Some((key.into_owned(), value.into_owned()));
            }
            if replaced {
                return None;
            }
            replaced = true;
            Some((key.into_owned(), page.clone()))
        })
        .collect();

    let mut href = url.clone();
    {
        let mut query = href.query_pairs_mut();
        query.clear();
        for (key, value) in &pairs {
            query.append_pair(key, value);
        }
        if !replaced {
            query.append_pair(param, &page);
        }
    }
    href
}

/// A range entry paired with the URL that selects it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeLink {
    /// The displayed entry
    pub entry: RangeEntry,
    /// Target URL; `None` for ellipsis entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// Pair each entry of a range with its `page_href`
pub fn range_links(url: &Url, param: &str, entries: &[RangeEntry]) -> Vec<RangeLink> {
    entries
        .iter()
        .map(|entry| RangeLink {
            entry: *entry,
            href: entry.page().map(|page| page_href(url, param, page).to_string()),
        })
        .collect()
}

/// First value of a query parameter
fn query_value(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}
