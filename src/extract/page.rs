// src/extract/page.rs

use thiserror::Error;

use crate::core::html::{inner_after_open_tag, next_tag_block_ci, strip_tags};
use crate::core::sanitize::normalize_entities;
use crate::extract::{auction_ids::extract_auction_ids, label::split_quantity_and_item};
use crate::record::AuctionRecord;
use crate::{logd, s};

const COL_LABEL: &str = "Auction";
const COL_PRICE: &str = "Current Price";

/// Why a page contributed nothing. All of these are recoverable: the
/// driver logs and moves on to the next page.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageReject {
    #[error("no data table found in page")]
    NoTable,
    #[error("required column missing: {0}")]
    MissingColumn(&'static str),
    #[error("data table has no rows")]
    NoRows,
    #[error("price column failed to parse at row {row}: {raw:?}")]
    BadPrice { row: usize, raw: String },
    #[error("auction id count {ids} does not match row count {rows}")]
    IdMismatch { ids: usize, rows: usize },
}

/// Extract all auction records from one listing page. Pure function of
/// the markup: identical input, identical output.
///
/// The price cast is column-wide: one unparseable price rejects the
/// whole page rather than dropping the row.
pub fn process_page(doc: &str) -> Result<Vec<AuctionRecord>, PageReject> {
    // First table in the document is the data table.
    let (t_s, t_e) = next_tag_block_ci(doc, "<table", "</table>", 0).ok_or(PageReject::NoTable)?;
    let table = &doc[t_s..t_e];

    let headers = header_cells(table);
    let col_label = column_index(&headers, COL_LABEL).ok_or(PageReject::MissingColumn(COL_LABEL))?;
    let col_price = column_index(&headers, COL_PRICE).ok_or(PageReject::MissingColumn(COL_PRICE))?;

    let rows = data_rows(table);
    if rows.is_empty() {
        return Err(PageReject::NoRows);
    }

    // Column-wide price cast, first failure rejects the page.
    let mut prices = Vec::with_capacity(rows.len());
    for (i, cells) in rows.iter().enumerate() {
        let raw = cells.get(col_price).map(String::as_str).unwrap_or("");
        match parse_price(raw) {
            Some(p) => prices.push(p),
            None => return Err(PageReject::BadPrice { row: i + 1, raw: s!(raw) }),
        }
    }

    let ids = extract_auction_ids(doc);
    if ids.len() != rows.len() {
        return Err(PageReject::IdMismatch { ids: ids.len(), rows: rows.len() });
    }

    let mut records = Vec::with_capacity(rows.len());
    for ((cells, price), auction_id) in rows.iter().zip(prices).zip(ids) {
        let raw_label = cells.get(col_label).cloned().unwrap_or_default();
        let (quantity, item) = split_quantity_and_item(&raw_label);
        records.push(AuctionRecord { raw_label, price, auction_id, quantity, item });
    }

    logd!(
        "processed page: {} rows, price range {:?}-{:?}",
        records.len(),
        records.first().map(|r| r.price),
        records.last().map(|r| r.price)
    );
    Ok(records)
}

/// `<th>` texts of the table's first row.
fn header_cells(table: &str) -> Vec<String> {
    let Some((tr_s, tr_e)) = next_tag_block_ci(table, "<tr", "</tr>", 0) else {
        return Vec::new();
    };
    let tr = &table[tr_s..tr_e];

    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((th_s, th_e)) = next_tag_block_ci(tr, "<th", "</th>", pos) {
        out.push(cell_text(&tr[th_s..th_e]));
        pos = th_e;
    }
    out
}

/// Cell texts of every row after the header, in row order.
fn data_rows(table: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut pos = 0usize;
    let mut row_no = 0usize;
    while let Some((tr_s, tr_e)) = next_tag_block_ci(table, "<tr", "</tr>", pos) {
        let tr = &table[tr_s..tr_e];
        pos = tr_e;
        row_no += 1;
        if row_no == 1 {
            continue;
        }

        let mut cells = Vec::new();
        let mut td_pos = 0usize;
        while let Some((td_s, td_e)) = next_tag_block_ci(tr, "<td", "</td>", td_pos) {
            cells.push(cell_text(&tr[td_s..td_e]));
            td_pos = td_e;
        }
        if !cells.is_empty() {
            rows.push(cells);
        }
    }
    rows
}

fn cell_text(block: &str) -> String {
    strip_tags(normalize_entities(&inner_after_open_tag(block)))
}

fn column_index(headers: &[String], name: &str) -> Option<usize> {
    headers.iter().position(|h| h.eq_ignore_ascii_case(name))
}

/// "$1,234" → 1234. Currency symbol and grouping commas are stripped
/// wherever they appear, everything left must be a plain integer.
fn parse_price(raw: &str) -> Option<u64> {
    let cleaned: String = raw.chars().filter(|c| *c != '$' && *c != ',').collect();
    cleaned.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(rows: &[(&str, &str, Option<&str>)]) -> String {
        let body: String = rows
            .iter()
            .map(|(label, price, id)| {
                let cell2 = match id {
                    Some(id) => format!(
                        r#"<a onclick="window.location='/pokebay/auction/{id}/';">{label}</a>"#
                    ),
                    None => s!(*label),
                };
                format!("<tr><td>someone</td><td>{cell2}</td><td>{price}</td></tr>")
            })
            .collect();
        format!(
            r#"<table class="table-striped">
                 <tr><th>Seller</th><th>Auction</th><th>Current Price</th></tr>
                 {body}
               </table>"#
        )
    }

    #[test]
    fn extracts_aligned_records() {
        let doc = page(&[
            ("5x Rare Candy", "$450", Some("101")),
            ("Master Ball", "$1,200", None),
        ]);
        let records = process_page(&doc).unwrap();
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].raw_label, "5x Rare Candy");
        assert_eq!(records[0].price, 450);
        assert_eq!(records[0].quantity, 5);
        assert_eq!(records[0].item, "Rare Candy");
        assert_eq!(records[0].auction_id.as_deref(), Some("101"));

        assert_eq!(records[1].price, 1200);
        assert_eq!(records[1].quantity, 1);
        assert_eq!(records[1].auction_id, None);
    }

    #[test]
    fn no_table_rejects() {
        assert_eq!(process_page("<div>nothing here</div>"), Err(PageReject::NoTable));
    }

    #[test]
    fn missing_price_column_rejects() {
        let doc = r#"<table class="table-striped">
            <tr><th>Seller</th><th>Auction</th></tr>
            <tr><td>a</td><td>b</td></tr>
        </table>"#;
        assert_eq!(process_page(doc), Err(PageReject::MissingColumn("Current Price")));
    }

    #[test]
    fn empty_table_rejects() {
        let doc = r#"<table class="table-striped">
            <tr><th>Seller</th><th>Auction</th><th>Current Price</th></tr>
        </table>"#;
        assert_eq!(process_page(doc), Err(PageReject::NoRows));
    }

    #[test]
    fn one_bad_price_rejects_whole_page() {
        let doc = page(&[
            ("5x Rare Candy", "$450", Some("101")),
            ("Master Ball", "ended", Some("102")),
        ]);
        assert_eq!(
            process_page(&doc),
            Err(PageReject::BadPrice { row: 2, raw: s!("ended") })
        );
    }

    #[test]
    fn idempotent_on_identical_markup() {
        let doc = page(&[("3x Ultra Ball", "$99", Some("7"))]);
        assert_eq!(process_page(&doc), process_page(&doc));
    }
}
