// src/extract/label.rs

use crate::core::sanitize::normalize_ws;
use crate::{logd, s};

/// Split a listing label like "5x Rare Candy" into (quantity, item name).
///
/// Only the first `"x "` counts as a delimiter. A non-numeric left part
/// abandons the split entirely — "abcx Potion" stays whole rather than
/// becoming ("abc", "Potion"). Never fails; the worst case is
/// `(1, <whole label>)`.
pub fn split_quantity_and_item(raw: &str) -> (u32, String) {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return (1, s!());
    }

    if let Some(at) = trimmed.find("x ") {
        let (left, right) = (&trimmed[..at], &trimmed[at + 2..]);
        if let Ok(quantity) = left.trim().parse::<u32>() {
            return (quantity, normalize_ws(right));
        }
        logd!("label {trimmed:?}: non-numeric quantity prefix, keeping whole label");
    }

    (1, normalize_ws(trimmed))
}
