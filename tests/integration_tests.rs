//! Integration tests
//!
//! Tests the full listing flow: YAML config → listing URL → page count →
//! range → navigation → rewritten URL.

use clap::Parser;
use pagerange::cli::{Cli, Runner};
use pagerange::config::AppConfig;
use pagerange::pagination::{
    page_count, ControllableState, NavAction, PageWindow, PaginationController, PaginationParams,
};
use pagerange::query::{page_href, range_links, ListingQuery};
use pagerange::{RangeEntry, SortOrder};
use std::io::Write;
use url::Url;

fn write_config(yaml: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();
    file
}

// ============================================================================
// Listing Flow
// ============================================================================

#[test]
fn test_listing_flow_with_config() {
    let file = write_config(
        r#"
pagination:
  siblings: 1
  boundaries: 1
listing:
  page_size: 10
  page_param: page
"#,
    );
    let config = AppConfig::from_file(file.path()).unwrap();

    let url = Url::parse(
        "https://example.com/records?search=smith&page=6&sort=%5B%7B%22id%22%3A%22name%22%2C%22desc%22%3Atrue%7D%5D",
    )
    .unwrap();
    let query = ListingQuery::from_url(&url).unwrap();
    assert_eq!(query.search, "smith");
    assert_eq!(query.order_by(), vec![("name".to_string(), SortOrder::Desc)]);

    // 195 matching records at 10 per page
    let total = page_count(195, config.listing.page_size);
    assert_eq!(total, 20);

    let window = PageWindow::new(query.page, config.listing.page_size);
    assert_eq!((window.skip, window.take), (50, 10));

    let params = PaginationParams::new(i64::from(total), query.page)
        .with_siblings(config.pagination.siblings)
        .with_boundaries(config.pagination.boundaries);

    let mut href = None;
    let mut controller = PaginationController::with_handler(params, |page: u32| {
        href = Some(page_href(&url, &config.listing.page_param, page));
    });
    assert_eq!(
        controller.range(),
        vec![
            RangeEntry::Page(1),
            RangeEntry::Ellipsis,
            RangeEntry::Page(5),
            RangeEntry::Page(6),
            RangeEntry::Page(7),
            RangeEntry::Ellipsis,
            RangeEntry::Page(20),
        ]
    );
    controller.last();

    let href = href.unwrap();
    assert_eq!(ListingQuery::from_url(&href).unwrap().page, 20);
    assert_eq!(ListingQuery::from_url(&href).unwrap().search, "smith");
}

#[test]
fn test_links_cover_every_page_entry() {
    let url = Url::parse("https://example.com/records?page=1").unwrap();
    let range = PaginationController::new(PaginationParams::new(12, 1)).range();
    let links = range_links(&url, "page", &range);

    for link in &links {
        match link.entry {
            RangeEntry::Page(page) => {
                let target = Url::parse(link.href.as_deref().unwrap()).unwrap();
                assert_eq!(ListingQuery::from_url(&target).unwrap().page, i64::from(page));
            }
            RangeEntry::Ellipsis => assert!(link.href.is_none()),
        }
    }
}

#[test]
fn test_controlled_walk_through_pages() {
    let total = 6;
    let mut changes = Vec::new();
    let mut active = ControllableState::owned_with_handler(1_i64, |page: &i64| changes.push(*page));

    for action in [
        NavAction::Previous,
        NavAction::Next,
        NavAction::Next,
        NavAction::Last,
        NavAction::Next,
        NavAction::Goto(3),
    ] {
        let params = PaginationParams::new(total, *active.value());
        let mut requested = None;
        PaginationController::with_handler(params, |page: u32| requested = Some(page)).apply(action);
        active.set(i64::from(requested.unwrap()));
    }

    assert_eq!(active.into_value(), 3);
    // Staying on the same page does not count as a change
    assert_eq!(changes, vec![2, 3, 6, 3]);
}

// ============================================================================
// CLI
// ============================================================================

#[tokio::test]
async fn test_runner_range_command() {
    let cli = Cli::try_parse_from(["pagerange", "range", "--total", "20", "--page", "10"]).unwrap();
    Runner::new(cli).run().await.unwrap();
}

#[tokio::test]
async fn test_runner_walk_command_with_config() {
    let file = write_config("pagination:\n  siblings: 2\n");
    let path = file.path().to_str().unwrap();
    let cli = Cli::try_parse_from([
        "pagerange", "--config", path, "-f", "pretty", "walk", "--total", "30", "next", "last",
    ])
    .unwrap();
    Runner::new(cli).run().await.unwrap();
}

#[tokio::test]
async fn test_runner_missing_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.yaml");
    let cli = Cli::try_parse_from([
        "pagerange",
        "--config",
        missing.to_str().unwrap(),
        "pages",
        "--records",
        "10",
    ])
    .unwrap();

    let err = Runner::new(cli).run().await.unwrap_err();
    assert!(err.to_string().starts_with("File not found"));
}

#[tokio::test]
async fn test_runner_links_rejects_bad_url() {
    let cli = Cli::try_parse_from(["pagerange", "links", "--url", "nope", "--total", "4"]).unwrap();
    let err = Runner::new(cli).run().await.unwrap_err();
    assert!(err.to_string().contains("Failed to parse listing URL 'nope'"));
}
