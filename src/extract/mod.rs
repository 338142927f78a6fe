// src/extract/mod.rs
//! Page-specific extraction for the site.
//!
//! Each module here encodes where the ground truth lives in one page's
//! HTML and how to read it: the browse listing table (`page`, with
//! `label` and `auction_ids` as its row-level passes), the pagination
//! control (`pagination`), and the mart balance (`budget`).
//!
//! Everything is a pure function of the markup — no caching, no I/O, no
//! driver logic. Case-insensitive tag scanning via `core::html`; rows
//! that fail to resolve degrade (quantity 1, id `None`) instead of
//! blocking their siblings.

pub mod auction_ids;
pub mod budget;
pub mod label;
pub mod page;
pub mod pagination;
