// src/net.rs
// HTTP transport. All endpoints live behind the `Site` trait so the
// pagination driver and bid helper can be exercised against canned pages.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{self, HeaderMap, HeaderValue, InvalidHeaderValue};
use thiserror::Error;

use crate::config::Session;
use crate::s;
use crate::config::consts::{
    AUCTION_PATH, BASE_URL, BROWSE_PATH, MART_PATH, REQUEST_TIMEOUT_SECS, USER_AGENT,
};

#[derive(Debug, Error)]
pub enum NetError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },
    #[error("session token is not a valid header value")]
    Cookie(#[from] InvalidHeaderValue),
}

/// The three site endpoints the crate talks to.
pub trait Site {
    /// POST the browse listing, price-ascending. `page` 1 omits the page
    /// query parameter, matching what the site serves by default.
    fn fetch_listing_page(&self, filter: &str, page: u32) -> Result<String, NetError>;

    /// GET the mart page carrying the account balance.
    fn fetch_budget_page(&self) -> Result<String, NetError>;

    /// POST a bid to an auction page, returning the raw response fragment.
    fn post_bid(&self, auction_id: &str, amount: u64) -> Result<String, NetError>;
}

/// Live transport: one blocking client, session cookie and fixed browser
/// profile headers attached at construction.
pub struct Transport {
    client: Client,
}

impl Transport {
    pub fn new(session: Session) -> Result<Self, NetError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .default_headers(base_headers(&session)?)
            .build()?;
        Ok(Self { client })
    }

    fn post(&self, url: &str, body: String) -> Result<String, NetError> {
        let resp = self.client.post(url).body(body).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(NetError::Status { status: status.as_u16(), url: url.to_string() });
        }
        Ok(resp.text()?)
    }

    fn get(&self, url: &str) -> Result<String, NetError> {
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(NetError::Status { status: status.as_u16(), url: url.to_string() });
        }
        Ok(resp.text()?)
    }
}

impl Site for Transport {
    fn fetch_listing_page(&self, filter: &str, page: u32) -> Result<String, NetError> {
        let mut url = format!(
            "{BASE_URL}{BROWSE_PATH}?order=pricelow&filter={filter}&search=&ajax=1"
        );
        if page > 1 {
            url.push_str(&format!("&page={page}"));
        }
        self.post(&url, s!())
    }

    fn fetch_budget_page(&self) -> Result<String, NetError> {
        self.get(&format!("{BASE_URL}{MART_PATH}"))
    }

    fn post_bid(&self, auction_id: &str, amount: u64) -> Result<String, NetError> {
        let url = format!("{BASE_URL}{AUCTION_PATH}{auction_id}/?&ajax=1");
        self.post(&url, format!("bid={amount}&quickbid={amount}"))
    }
}

fn base_headers(session: &Session) -> Result<HeaderMap, InvalidHeaderValue> {
    let mut h = HeaderMap::new();
    h.insert(header::ACCEPT, HeaderValue::from_static("*/*"));
    h.insert(header::ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    h.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/x-www-form-urlencoded"),
    );
    h.insert(header::ORIGIN, HeaderValue::from_static(BASE_URL));
    h.insert(header::REFERER, HeaderValue::from_static("https://www.pokemon-vortex.com/pokebay/"));
    h.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
    h.insert(header::COOKIE, HeaderValue::from_str(&session.cookie())?);
    Ok(h)
}
