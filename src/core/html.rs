// src/core/html.rs
// Low-level HTML string scanning, case-insensitive on ASCII tag and
// attribute names. Deliberately naive but tailored to the site's markup.

use crate::s;

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Find the next complete tag block from `from` onwards, case-insensitive.
/// A block is from the start of the opening tag to the end of the closing
/// tag, e.g. `<tr ...> ... </tr>`. Only safe for tags that don't nest.
pub fn next_tag_block_ci(s: &str, o: &str, c: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(o);
    let cl = to_lower(c);
    let start = lc.get(from..)?.find(&ol)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&cl)?;
    let end = open_end + end_rel + c.len();
    Some((start, end))
}

/// Like [`next_tag_block_ci`], but only accepts blocks whose opening tag
/// carries `marker` somewhere in its attribute text (e.g. a class name or
/// an id). Skips non-matching blocks.
pub fn next_tag_block_with_attr_ci(
    s: &str,
    o: &str,
    c: &str,
    marker: &str,
    from: usize,
) -> Option<(usize, usize)> {
    let marker = to_lower(marker);
    let mut pos = from;
    while let Some((start, end)) = next_tag_block_ci(s, o, c, pos) {
        let head_end = s[start..].find('>').map(|i| start + i)?;
        if to_lower(&s[start..head_end]).contains(&marker) {
            return Some((start, end));
        }
        pos = head_end + 1;
    }
    None
}

/// Read a quoted attribute value from a tag's opening text,
/// e.g. `attr_value_ci(head, "onclick")`.
pub fn attr_value_ci(tag_head: &str, name: &str) -> Option<String> {
    let lc = to_lower(tag_head);
    let key = format!("{}=", to_lower(name));
    let at = lc.find(&key)? + key.len();
    let mut chars = tag_head[at..].char_indices();
    let (_, quote) = chars.next()?;
    if quote != '"' && quote != '\'' {
        return None;
    }
    let rest = &tag_head[at + 1..];
    let end = rest.find(quote)?;
    Some(rest[..end].to_string())
}

/// Given a complete tag block like `<td ...>INNER</td>`,
/// return the INNER text without the wrapping tags (may contain nested tags).
pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

/// Remove all HTML tags `<...>`, then collapse whitespace.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}
