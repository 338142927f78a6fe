// src/bid.rs

use crate::core::html::to_lower;
use crate::net::{NetError, Site};
use crate::{loge, logf, logw};

/// Closed set of bid results. The site answers with a free-text HTML
/// fragment; classification happens once, case-insensitively, and
/// anything unrecognized lands in `Unknown` instead of passing as a
/// success.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BidOutcome {
    Success,
    InsufficientFunds,
    BidTooLow,
    AuctionEnded,
    Unknown,
}

impl BidOutcome {
    pub fn is_success(self) -> bool {
        matches!(self, BidOutcome::Success)
    }

    pub fn describe(self) -> &'static str {
        match self {
            BidOutcome::Success => "bid placed",
            BidOutcome::InsufficientFunds => "not enough money for a bid that high",
            BidOutcome::BidTooLow => "bid must be higher than the current price",
            BidOutcome::AuctionEnded => "auction has already ended",
            BidOutcome::Unknown => "unrecognized response",
        }
    }
}

/// Map the site's response fragment to an outcome.
pub fn classify_response(text: &str) -> BidOutcome {
    let lc = to_lower(text);
    if lc.contains("you do not have enough money to make a bid that high") {
        BidOutcome::InsufficientFunds
    } else if lc.contains("sorry, your bid wasn't high enough to place") {
        BidOutcome::BidTooLow
    } else if lc.contains("sorry, this auction has ended") {
        BidOutcome::AuctionEnded
    } else if lc.contains("your bid has been placed") {
        BidOutcome::Success
    } else {
        BidOutcome::Unknown
    }
}

/// Submit one bid. Transport failures propagate; anything that came back
/// as a page is classified and returned, success or not.
pub fn place_bid(site: &impl Site, auction_id: &str, amount: u64) -> Result<BidOutcome, NetError> {
    logf!("bidding ${amount} on auction {auction_id}");
    let text = site.post_bid(auction_id, amount)?;

    let outcome = classify_response(&text);
    match outcome {
        BidOutcome::Success => logf!("auction {auction_id}: {}", outcome.describe()),
        BidOutcome::Unknown => logw!("auction {auction_id}: {}", outcome.describe()),
        _ => loge!("auction {auction_id}: bid failed, {}", outcome.describe()),
    }
    Ok(outcome)
}
