// src/extract/auction_ids.rs

use crate::core::html::{attr_value_ci, next_tag_block_ci, next_tag_block_with_attr_ci};
use crate::{logd, logw};

/// Class marker identifying the striped auction table.
const TABLE_MARKER: &str = "table-striped";

/// Path fragment the row links embed the auction id in.
const AUCTION_LINK_PREFIX: &str = "/pokebay/auction/";

/// Extract one auction id per data row of the striped auction table,
/// in row order. `None` marks a row whose id can't be resolved; the
/// output length always equals the data-row count so it can be zipped
/// positionally with the other per-row passes.
///
/// A missing table yields an empty vec — "no structure found", which the
/// caller must not confuse with "zero auctions".
pub fn extract_auction_ids(doc: &str) -> Vec<Option<String>> {
    let mut ids = Vec::new();

    let Some((t_s, t_e)) = next_tag_block_with_attr_ci(doc, "<table", "</table>", TABLE_MARKER, 0)
    else {
        logw!("auction table ({TABLE_MARKER}) not found");
        return ids;
    };
    let table = &doc[t_s..t_e];

    let mut pos = 0usize;
    let mut row_no = 0usize;
    while let Some((tr_s, tr_e)) = next_tag_block_ci(table, "<tr", "</tr>", pos) {
        let tr = &table[tr_s..tr_e];
        pos = tr_e;
        row_no += 1;
        if row_no == 1 {
            continue; // header row
        }

        // <td> cells
        let mut cells = Vec::new();
        let mut td_pos = 0usize;
        while let Some((td_s, td_e)) = next_tag_block_ci(tr, "<td", "</td>", td_pos) {
            cells.push(&tr[td_s..td_e]);
            td_pos = td_e;
        }

        if cells.len() < 2 {
            logd!("row {}: too few cells, no id", row_no - 1);
            ids.push(None);
            continue;
        }

        ids.push(id_from_cell(cells[1]));
    }

    logd!(
        "extracted {} auction ids over {} rows",
        ids.iter().filter(|i| i.is_some()).count(),
        ids.len()
    );
    ids
}

/// The second cell carries a link whose inline onclick handler navigates
/// to `/pokebay/auction/<digits>/`.
fn id_from_cell(cell: &str) -> Option<String> {
    let (a_s, a_e) = next_tag_block_ci(cell, "<a", "</a>", 0)?;
    let a = &cell[a_s..a_e];
    let head = &a[..a.find('>')?];
    let onclick = attr_value_ci(head, "onclick")?;
    id_from_onclick(&onclick)
}

fn id_from_onclick(onclick: &str) -> Option<String> {
    let at = onclick.find(AUCTION_LINK_PREFIX)? + AUCTION_LINK_PREFIX.len();
    let rest = &onclick[at..];
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() || !rest[digits.len()..].starts_with('/') {
        return None;
    }
    Some(digits)
}
