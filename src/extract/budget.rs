// src/extract/budget.rs

use thiserror::Error;

use crate::core::html::{inner_after_open_tag, next_tag_block_with_attr_ci, strip_tags};
use crate::core::sanitize::normalize_entities;
use crate::logd;

/// Element id carrying the balance on the mart page.
const CASH_MARKER: &str = "yourCash";

/// The budget is the one fact the whole traversal hinges on, so unlike
/// page-level extraction every failure here is fatal to the caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BudgetError {
    #[error("balance element (yourCash) not found on mart page")]
    MissingMarker,
    #[error("balance text has no dollar amount: {0:?}")]
    NoAmount(String),
    #[error("could not parse balance from {0:?}")]
    BadAmount(String),
}

/// Read the spendable balance from the mart page. Expected element text:
/// "Your Cash: $1,234,567".
pub fn parse_budget(doc: &str) -> Result<u64, BudgetError> {
    let (s, e) = next_tag_block_with_attr_ci(doc, "<div", "</div>", CASH_MARKER, 0)
        .ok_or(BudgetError::MissingMarker)?;
    let text = strip_tags(normalize_entities(&inner_after_open_tag(&doc[s..e])));
    logd!("raw cash text: {text:?}");

    let dollar = text.find('$').ok_or_else(|| BudgetError::NoAmount(text.clone()))?;
    let amount: String = text[dollar + 1..].chars().filter(|c| *c != ',').collect();
    amount
        .trim()
        .parse()
        .map_err(|_| BudgetError::BadAmount(text.clone()))
}
