// src/scrape/browse.rs
// Sequential walk over the browse listing: budget first, then page 1,
// then pages 2..=total one at a time with a politeness pause, appending
// each accepted page to a checkpoint CSV. Stops early once the tail of a
// page prices past the budget; finishes by writing the final CSV and
// removing the checkpoint.

use std::{
    fs,
    path::PathBuf,
    thread,
    time::Duration,
};

use thiserror::Error;

use crate::config::consts::{CHECKPOINT_CSV, FINAL_CSV, REQUEST_PAUSE_MS};
use crate::extract::{budget::{self, BudgetError}, page, pagination};
use crate::file::{append_rows, write_rows_start};
use crate::net::{NetError, Site};
use crate::record::AuctionRecord;
use crate::{loge, logf, logw};

/// Fatal traversal failures. Everything page-level (transport errors on
/// pages ≥ 2, rejected markup) is absorbed as skip-and-continue and never
/// shows up here.
#[derive(Debug, Error)]
pub enum BrowseError {
    #[error("budget page fetch failed: {0}")]
    BudgetFetch(#[source] NetError),
    #[error("budget unreadable: {0}")]
    Budget(#[from] BudgetError),
    #[error("first listing page fetch failed: {0}")]
    FirstPage(#[source] NetError),
    #[error("artifact write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// What a finished traversal produced.
#[derive(Debug)]
pub struct BrowseOutcome {
    /// Accepted records across all processed pages, in page order.
    pub records: Vec<AuctionRecord>,
    /// Page count the site declared on page 1.
    pub total_pages: u32,
    /// Pages that actually contributed records.
    pub pages_scraped: u32,
    /// True when the budget heuristic cut the walk short.
    pub stopped_early: bool,
}

pub struct Browser<S: Site> {
    site: S,
    checkpoint: PathBuf,
    final_out: PathBuf,
    pause: Duration,
}

impl<S: Site> Browser<S> {
    pub fn new(site: S) -> Self {
        Self {
            site,
            checkpoint: PathBuf::from(CHECKPOINT_CSV),
            final_out: PathBuf::from(FINAL_CSV),
            pause: Duration::from_millis(REQUEST_PAUSE_MS),
        }
    }

    pub fn with_paths(mut self, checkpoint: PathBuf, final_out: PathBuf) -> Self {
        self.checkpoint = checkpoint;
        self.final_out = final_out;
        self
    }

    pub fn with_final_out(mut self, final_out: PathBuf) -> Self {
        self.final_out = final_out;
        self
    }

    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    pub fn site(&self) -> &S {
        &self.site
    }

    /// Walk the listing for `filter`, price-ascending.
    ///
    /// The stop condition is a heuristic, not an affordability guarantee:
    /// it trusts the site to honor the ascending sort, and only looks at
    /// the last (highest-priced) row of each page from page 2 on. If the
    /// sort isn't honored upstream it over- or under-triggers.
    pub fn run(&self, filter: &str) -> Result<BrowseOutcome, BrowseError> {
        logf!("browsing auctions, filter: {filter}");

        // Budget first: without it there is no stop condition.
        let budget_page = self.site.fetch_budget_page().map_err(BrowseError::BudgetFetch)?;
        let budget = budget::parse_budget(&budget_page)?;
        logf!("current budget: ${budget}");

        // Page 1 is the only fatal fetch.
        let first = self
            .site
            .fetch_listing_page(filter, 1)
            .map_err(BrowseError::FirstPage)?;
        let total_pages = pagination::total_pages(&first);
        logf!("total pages to scrape: {total_pages}");

        let mut records = match page::process_page(&first) {
            Ok(r) => r,
            Err(reason) => {
                logw!("first page returned no data ({reason}), nothing to scrape");
                return Ok(BrowseOutcome {
                    records: Vec::new(),
                    total_pages,
                    pages_scraped: 0,
                    stopped_early: false,
                });
            }
        };

        write_rows_start(&self.checkpoint, Some(&AuctionRecord::headers()))?;
        append_rows(&self.checkpoint, &to_rows(&records))?;
        logf!("page 1/{total_pages} - {} auctions", records.len());

        let mut pages_scraped = 1u32;
        let mut stopped_early = false;

        for page_no in 2..=total_pages {
            thread::sleep(self.pause); // rate limit

            let doc = match self.site.fetch_listing_page(filter, page_no) {
                Ok(d) => d,
                Err(e) => {
                    loge!("page {page_no}/{total_pages}: fetch failed: {e}");
                    continue;
                }
            };

            let page_records = match page::process_page(&doc) {
                Ok(r) => r,
                Err(reason) => {
                    logw!("page {page_no}/{total_pages}: skipped ({reason})");
                    continue;
                }
            };

            append_rows(&self.checkpoint, &to_rows(&page_records))?;

            // Listings are price-ascending, so the page tail is its
            // highest price. Accepted pages always have at least one row.
            let tail_price = page_records.last().map(|r| r.price);
            records.extend(page_records);
            pages_scraped += 1;
            logf!(
                "page {page_no}/{total_pages} - total {} auctions",
                records.len()
            );

            if let Some(tail) = tail_price {
                if tail > budget {
                    logf!("stopping early: page tail ${tail} exceeds budget ${budget}");
                    stopped_early = true;
                    break;
                }
            }
        }

        write_rows_start(&self.final_out, Some(&AuctionRecord::headers()))?;
        append_rows(&self.final_out, &to_rows(&records))?;
        if self.checkpoint.exists() {
            fs::remove_file(&self.checkpoint)?;
        }

        logf!(
            "browse complete: {} auctions over {pages_scraped} page(s), final at {}",
            records.len(),
            self.final_out.display()
        );
        Ok(BrowseOutcome { records, total_pages, pages_scraped, stopped_early })
    }
}

fn to_rows(records: &[AuctionRecord]) -> Vec<Vec<String>> {
    records.iter().map(AuctionRecord::to_row).collect()
}
