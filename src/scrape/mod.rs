// src/scrape/mod.rs
mod browse;

pub use browse::{Browser, BrowseError, BrowseOutcome};
