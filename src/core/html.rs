// src/core/html.rs

// Hand-rolled tag-block scanning. Byte offsets are shared between the
// original string and its lowered copy because only ASCII is mapped.

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

/// Next `o`..`c` tag block at or after byte `from`, case-insensitive.
/// `o` is an open-tag prefix like "<td"; a hit followed by a tag-name
/// character is rejected, so "<th" does not match "<thead".
pub fn next_tag_block_ci(s: &str, o: &str, c: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(o);
    let cl = to_lower(c);

    let mut at = from;
    loop {
        let start = lc.get(at..)?.find(&ol)? + at;
        let next = lc.as_bytes().get(start + ol.len()).copied();
        if matches!(next, Some(b) if b.is_ascii_alphanumeric()) {
            at = start + ol.len();
            continue;
        }
        let open_end = s[start..].find('>')? + start + 1;
        let end_rel = lc[open_end..].find(&cl)?;
        let end = open_end + end_rel + c.len();
        return Some((start, end));
    }
}

/// Contents of a block between its open tag and last close tag.
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

/// Clean text of the first nested `<span>` in a cell block, if any.
/// The wiki wraps display names in spans inside the row-leading cell.
pub fn first_span_text(block: &str) -> Option<String> {
    let (s0, s1) = next_tag_block_ci(block, "<span", "</span>", 0)?;
    let inner = inner_after_open_tag(&block[s0..s1]);
    Some(strip_tags(super::sanitize::normalize_entities(&inner)))
}
