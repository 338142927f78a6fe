// tests/browse_e2e.rs
//
// Pagination driver scenarios against a canned Site implementation.
//
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use pokebay_scrape::csv::parse_rows;
use pokebay_scrape::net::{NetError, Site};
use pokebay_scrape::record::AuctionRecord;
use pokebay_scrape::scrape::{Browser, BrowseError};

/* ---------------- harness ---------------- */

struct StubSite {
    /// Mart page; `None` simulates a transport failure.
    budget: Option<String>,
    /// Listing pages by ordinal (index 0 = page 1); `None` fails the fetch.
    pages: Vec<Option<String>>,
    requests: RefCell<Vec<u32>>,
}

impl StubSite {
    fn new(budget: u64, pages: Vec<Option<String>>) -> Self {
        Self {
            budget: Some(budget_page(budget)),
            pages,
            requests: RefCell::new(Vec::new()),
        }
    }

    fn requested(&self) -> Vec<u32> {
        self.requests.borrow().clone()
    }
}

impl Site for StubSite {
    fn fetch_listing_page(&self, _filter: &str, page: u32) -> Result<String, NetError> {
        self.requests.borrow_mut().push(page);
        match self.pages.get((page - 1) as usize) {
            Some(Some(html)) => Ok(html.clone()),
            _ => Err(NetError::Status { status: 500, url: format!("listing page {page}") }),
        }
    }

    fn fetch_budget_page(&self) -> Result<String, NetError> {
        self.budget
            .clone()
            .ok_or(NetError::Status { status: 500, url: "mart".to_string() })
    }

    fn post_bid(&self, _auction_id: &str, _amount: u64) -> Result<String, NetError> {
        unreachable!("browse never bids")
    }
}

fn budget_page(amount: u64) -> String {
    format!(r#"<html><div id="yourCash"><b>Your Cash:</b> ${amount}</div></html>"#)
}

/// A listing page: pagination control declaring `total_pages`, then the
/// striped auction table with one row per (label, price, id).
fn listing_page(total_pages: u32, rows: &[(&str, u64, u64)]) -> String {
    let body: String = rows
        .iter()
        .map(|(label, price, id)| {
            format!(
                "<tr><td>someone</td>\
                 <td><a onclick=\"window.location='/pokebay/auction/{id}/';\">{label}</a></td>\
                 <td>${price}</td></tr>"
            )
        })
        .collect();
    format!(
        r#"<html>
        <div class="pagination"><div class="page-num">{total_pages}</div></div>
        <table class="table-striped">
          <tr><th>Seller</th><th>Auction</th><th>Current Price</th></tr>
          {body}
        </table>
        </html>"#
    )
}

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("pokebay_e2e_{name}"));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn browser(site: StubSite, dir: &PathBuf) -> Browser<StubSite> {
    Browser::new(site)
        .with_paths(dir.join("progressive.csv"), dir.join("final.csv"))
        .with_pause(Duration::ZERO)
}

/* ---------------- scenarios ---------------- */

#[test]
fn stops_early_once_page_tail_exceeds_budget() {
    // Budget 500. Page 2 tails at 450 (within), page 3 at 600 (over):
    // page 3 is still kept, nothing after it is fetched.
    let dir = tmp_dir("early_stop");
    let site = StubSite::new(
        500,
        vec![
            Some(listing_page(3, &[("2x Potion", 100, 1), ("Great Ball", 200, 2)])),
            Some(listing_page(3, &[("Ultra Ball", 300, 3), ("5x Rare Candy", 450, 4)])),
            Some(listing_page(3, &[("Master Ball", 500, 5), ("Sacred Ash", 600, 6)])),
        ],
    );
    let b = browser(site, &dir);

    let outcome = b.run("items").unwrap();

    assert!(outcome.stopped_early);
    assert_eq!(outcome.total_pages, 3);
    assert_eq!(outcome.pages_scraped, 3);
    assert_eq!(outcome.records.len(), 6);
    assert_eq!(outcome.records.last().unwrap().price, 600);

    // Checkpoint superseded, final artifact holds everything.
    assert!(!dir.join("progressive.csv").exists());
    let final_rows = parse_rows(&fs::read_to_string(dir.join("final.csv")).unwrap());
    assert_eq!(final_rows.len(), 7); // header + 6 records
    assert_eq!(final_rows[0], AuctionRecord::headers());
    assert_eq!(final_rows[1], vec!["2x Potion", "100", "1", "2", "Potion"]);
    assert_eq!(final_rows[6], vec!["Sacred Ash", "600", "6", "1", "Sacred Ash"]);
}

#[test]
fn pages_after_the_stop_are_never_fetched() {
    let dir = tmp_dir("no_fetch_after_stop");
    let site = StubSite::new(
        100,
        vec![
            Some(listing_page(4, &[("Potion", 50, 1)])),
            Some(listing_page(4, &[("Ultra Ball", 450, 2)])),
            Some(listing_page(4, &[("never requested", 999, 3)])),
            Some(listing_page(4, &[("never requested", 999, 4)])),
        ],
    );
    let b = browser(site, &dir);

    let outcome = b.run("items").unwrap();

    assert!(outcome.stopped_early);
    assert_eq!(outcome.records.len(), 2);
    assert_eq!(b_requests(&b), vec![1, 2]);
}

#[test]
fn empty_first_page_ends_the_traversal() {
    let dir = tmp_dir("empty_first");
    let site = StubSite::new(500, vec![Some("<div>maintenance</div>".to_string())]);
    let b = browser(site, &dir);

    let outcome = b.run("items").unwrap();

    assert!(outcome.records.is_empty());
    assert_eq!(outcome.pages_scraped, 0);
    assert!(!outcome.stopped_early);
    assert_eq!(b_requests(&b), vec![1]);
    // Nothing usable means no artifacts at all.
    assert!(!dir.join("progressive.csv").exists());
    assert!(!dir.join("final.csv").exists());
}

#[test]
fn failed_middle_page_is_skipped_not_fatal() {
    // Page 4 of 5 dies at the transport level; 1,2,3,5 survive.
    let dir = tmp_dir("skip_failed");
    let site = StubSite::new(
        100_000,
        vec![
            Some(listing_page(5, &[("Potion", 10, 1)])),
            Some(listing_page(5, &[("Great Ball", 20, 2)])),
            Some(listing_page(5, &[("Ultra Ball", 30, 3)])),
            None,
            Some(listing_page(5, &[("Master Ball", 50, 5)])),
        ],
    );
    let b = browser(site, &dir);

    let outcome = b.run("items").unwrap();

    assert!(!outcome.stopped_early);
    assert_eq!(outcome.pages_scraped, 4);
    assert_eq!(b_requests(&b), vec![1, 2, 3, 4, 5]);
    let labels: Vec<_> = outcome.records.iter().map(|r| r.raw_label.as_str()).collect();
    assert_eq!(labels, vec!["Potion", "Great Ball", "Ultra Ball", "Master Ball"]);
}

#[test]
fn unusable_middle_page_is_skipped_not_fatal() {
    let dir = tmp_dir("skip_unusable");
    let site = StubSite::new(
        100_000,
        vec![
            Some(listing_page(3, &[("Potion", 10, 1)])),
            Some("<div>no table on this one</div>".to_string()),
            Some(listing_page(3, &[("Master Ball", 50, 3)])),
        ],
    );
    let b = browser(site, &dir);

    let outcome = b.run("items").unwrap();

    assert_eq!(outcome.pages_scraped, 2);
    assert_eq!(outcome.records.len(), 2);
    assert!(!dir.join("progressive.csv").exists());
}

#[test]
fn missing_pagination_control_means_single_page() {
    let dir = tmp_dir("single_page");
    // No pagination div at all: page 2 must never be requested.
    let page = r#"<html><table class="table-striped">
        <tr><th>Seller</th><th>Auction</th><th>Current Price</th></tr>
        <tr><td>someone</td><td><a onclick="window.location='/pokebay/auction/9/';">Potion</a></td><td>$10</td></tr>
        </table></html>"#;
    let site = StubSite::new(500, vec![Some(page.to_string())]);
    let b = browser(site, &dir);

    let outcome = b.run("items").unwrap();

    assert_eq!(outcome.total_pages, 1);
    assert_eq!(outcome.records.len(), 1);
    assert_eq!(b_requests(&b), vec![1]);
}

#[test]
fn unavailable_budget_is_fatal() {
    let dir = tmp_dir("budget_fatal");
    let mut site = StubSite::new(0, vec![Some(listing_page(1, &[("Potion", 10, 1)]))]);
    site.budget = None;
    let b = browser(site, &dir);

    let err = b.run("items").unwrap_err();
    assert!(matches!(err, BrowseError::BudgetFetch(_)));
    // The stop condition is unknown, so not even page 1 was requested.
    assert_eq!(b_requests(&b), Vec::<u32>::new());
}

#[test]
fn unreadable_budget_is_fatal() {
    let dir = tmp_dir("budget_unreadable");
    let mut site = StubSite::new(0, vec![Some(listing_page(1, &[("Potion", 10, 1)]))]);
    site.budget = Some("<html>no cash element</html>".to_string());
    let b = browser(site, &dir);

    assert!(matches!(b.run("items").unwrap_err(), BrowseError::Budget(_)));
}

#[test]
fn first_page_transport_failure_is_fatal() {
    let dir = tmp_dir("first_page_fatal");
    let site = StubSite::new(500, vec![None, Some(listing_page(2, &[("Potion", 10, 2)]))]);
    let b = browser(site, &dir);

    let err = b.run("items").unwrap_err();
    assert!(matches!(err, BrowseError::FirstPage(_)));
    assert_eq!(b_requests(&b), vec![1]);
}

/* ---------------- helpers ---------------- */

fn b_requests(b: &Browser<StubSite>) -> Vec<u32> {
    b.site().requested()
}
