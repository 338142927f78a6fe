// src/extract/pagination.rs

use crate::core::html::{next_tag_block_with_attr_ci, strip_tags};
use crate::{loge, logw};

/// Read the declared total page count from the pagination control: the
/// last `page-num` entry inside the `pagination` div. Absent or
/// unreadable controls mean a single page — no further fetches.
pub fn total_pages(doc: &str) -> u32 {
    // Only the start of the control matters: the page-num scan below
    // walks forward from there.
    let Some((control, _)) = next_tag_block_with_attr_ci(doc, "<div", "</div>", "pagination", 0) else {
        logw!("no pagination control found, assuming 1 page");
        return 1;
    };

    let mut last = None;
    let mut pos = control;
    while let Some((s, e)) = next_tag_block_with_attr_ci(doc, "<div", "</div>", "page-num", pos) {
        last = Some(strip_tags(&doc[s..e]));
        pos = e;
    }

    let Some(text) = last else {
        logw!("pagination control has no page numbers, assuming 1 page");
        return 1;
    };
    match text.trim().parse::<u32>() {
        Ok(n) if n >= 1 => n,
        _ => {
            loge!("could not parse total pages from {text:?}, assuming 1 page");
            1
        }
    }
}
