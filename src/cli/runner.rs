//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat, RangeArgs};
use crate::cli::report::{LinksReport, PagesReport, RangeReport, WalkStep};
use crate::config::AppConfig;
use crate::error::{Result, ResultExt};
use crate::pagination::{ControllableState, NavAction, PaginationController, PaginationParams};
use crate::query::{range_links, ListingQuery};
use serde::Serialize;
use url::Url;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = AppConfig::load(self.cli.config.as_deref())?;

        match &self.cli.command {
            Commands::Range { total, page, shape } => self.range(&config, *total, *page, *shape),
            Commands::Walk {
                total,
                page,
                shape,
                actions,
            } => self.walk(&config, *total, *page, *shape, actions),
            Commands::Pages {
                records,
                page_size,
                page,
            } => self.pages(&config, *records, *page_size, *page),
            Commands::Links { url, total, shape } => self.links(&config, url, *total, *shape),
            Commands::Serve { port } => {
                let port = port.unwrap_or(config.server.port);
                crate::cli::serve(config, port).await
            }
        }
    }

    /// Print the range for one params snapshot
    fn range(
        &self,
        config: &AppConfig,
        total: i64,
        page: Option<i64>,
        shape: RangeArgs,
    ) -> Result<()> {
        let page = page.unwrap_or_else(|| i64::from(config.listing.default_page));
        let controller = PaginationController::new(build_params(config, total, page, shape));
        let report = RangeReport::from_controller(&controller);
        self.emit(&report, || report.render())
    }

    /// Apply actions in order, feeding each clamped page back as the next active page
    fn walk(
        &self,
        config: &AppConfig,
        total: i64,
        page: Option<i64>,
        shape: RangeArgs,
        actions: &[NavAction],
    ) -> Result<()> {
        let start = page.unwrap_or_else(|| i64::from(config.listing.default_page));
        let mut active = ControllableState::owned_with_handler(start, |page: &i64| {
            tracing::debug!(page, "Active page changed");
        });

        let mut steps = Vec::with_capacity(actions.len());
        for action in actions {
            let from = *active.value();
            let mut changed = false;

            let mut controller = PaginationController::with_handler(
                build_params(config, total, from, shape),
                |page: u32| changed = active.set(i64::from(page)),
            );
            controller.apply(*action);

            let to = *active.value();
            let range = PaginationController::new(build_params(config, total, to, shape)).range();
            steps.push(WalkStep {
                action: action.to_string(),
                from,
                to,
                changed,
                range,
            });
        }

        self.emit(&steps, || {
            steps
                .iter()
                .map(WalkStep::render)
                .collect::<Vec<_>>()
                .join("\n")
        })
    }

    /// Print page count and record window
    fn pages(
        &self,
        config: &AppConfig,
        records: u64,
        page_size: Option<u32>,
        page: Option<i64>,
    ) -> Result<()> {
        let page_size = page_size.unwrap_or(config.listing.page_size);
        let page = page.unwrap_or_else(|| i64::from(config.listing.default_page));
        let report = PagesReport::new(records, page_size, page);
        self.emit(&report, || report.render())
    }

    /// Print range links for a listing URL
    fn links(&self, config: &AppConfig, url: &str, total: i64, shape: RangeArgs) -> Result<()> {
        let url = Url::parse(url).with_context(|| format!("Failed to parse listing URL '{url}'"))?;
        let report = build_links(config, &url, total, shape.siblings, shape.boundaries)?;
        self.emit(&report, || report.render())
    }

    /// Print `value` as JSON, or `pretty()` in pretty mode
    fn emit<T: Serialize>(&self, value: &T, pretty: impl FnOnce() -> String) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string(value)?),
            OutputFormat::Pretty => println!("{}", pretty()),
        }
        Ok(())
    }
}

/// Params for `total`/`page`, with sibling and boundary counts falling back to config
fn build_params(config: &AppConfig, total: i64, page: i64, shape: RangeArgs) -> PaginationParams {
    PaginationParams::new(total, page)
        .with_siblings(shape.siblings.unwrap_or(config.pagination.siblings))
        .with_boundaries(shape.boundaries.unwrap_or(config.pagination.boundaries))
}

/// Range links for a listing URL, reading the active page from the URL
pub(crate) fn build_links(
    config: &AppConfig,
    url: &Url,
    total: i64,
    siblings: Option<u32>,
    boundaries: Option<u32>,
) -> Result<LinksReport> {
    let param = config.listing.page_param.as_str();
    let query = ListingQuery::from_url_with_param(url, param, config.listing.default_page)?;
    let params = build_params(
        config,
        total,
        query.page,
        RangeArgs {
            siblings,
            boundaries,
        },
    );

    let range = PaginationController::new(params).range();
    Ok(LinksReport {
        order_by: query.order_by(),
        total: params.total,
        links: range_links(url, param, &range),
        query,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RangeEntry;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_build_params_falls_back_to_config() {
        let mut config = AppConfig::default();
        config.pagination.siblings = 2;

        let params = build_params(
            &config,
            50,
            7,
            RangeArgs {
                siblings: None,
                boundaries: Some(3),
            },
        );
        assert_eq!(params.siblings, 2);
        assert_eq!(params.boundaries, 3);
        assert_eq!(params.total, 50);
        assert_eq!(params.active, 7);
    }

    #[test]
    fn test_build_links_reads_page_from_url() {
        let config = AppConfig::default();
        let url = Url::parse("https://example.com/records?page=10&search=ann").unwrap();

        let report = build_links(&config, &url, 20, None, None).unwrap();
        assert_eq!(report.query.page, 10);
        assert_eq!(report.total, 20);

        let entries: Vec<RangeEntry> = report.links.iter().map(|link| link.entry).collect();
        assert_eq!(
            entries,
            vec![
                RangeEntry::Page(1),
                RangeEntry::Ellipsis,
                RangeEntry::Page(9),
                RangeEntry::Page(10),
                RangeEntry::Page(11),
                RangeEntry::Ellipsis,
                RangeEntry::Page(20),
            ]
        );
        assert_eq!(
            report.links[2].href.as_deref(),
            Some("https://example.com/records?page=9&search=ann")
        );
    }

    #[test]
    fn test_build_links_uses_configured_param() {
        let mut config = AppConfig::default();
        config.listing.page_param = "p".to_string();
        let url = Url::parse("https://example.com/records?p=2").unwrap();

        let report = build_links(&config, &url, 3, None, None).unwrap();
        assert_eq!(
            report.links[2].href.as_deref(),
            Some("https://example.com/records?p=3")
        );
    }

    #[test]
    fn test_build_links_rejects_bad_page() {
        let url = Url::parse("https://example.com/records?page=x").unwrap();
        let err = build_links(&AppConfig::default(), &url, 3, None, None).unwrap_err();
        assert!(err.is_client_error());
    }
}
