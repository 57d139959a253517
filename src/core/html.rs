// src/core/html.rs
//
// Case-insensitive tag slicing over raw HTML text. ASCII-only lowercasing keeps
// byte offsets identical between the lowered copy and the original, which
// matters for the Hangul-heavy timetable page.

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Find the next `<o ...> ... c` block at or after `from`.
/// Returns byte offsets `(start, end)` with `end` just past the closing pattern.
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

/// Every `<o ...> ... c` block inside `s`, in document order.
pub fn tag_blocks_ci<'a>(s: &'a str, o: &str, c: &str) -> Vec<&'a str> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((b_s, b_e)) = next_tag_block_ci(s, o, c, pos) {
        out.push(&s[b_s..b_e]);
        pos = b_e;
    }
    out
}

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

/// The opening tag of a block, `<td class=...>` included.
pub fn opener(block: &str) -> &str {
    let end = block.find('>').map(|i| i + 1).unwrap_or(block.len());
    &block[..end]
}

/// Value of attribute `name` in an opening tag; quotes optional.
pub fn attr_value<'a>(open_tag: &'a str, name: &str) -> Option<&'a str> {
    let lc = to_lower(open_tag);
    let needle = join!(&to_lower(name), "=");
    let mut from = 0usize;
    // Skip matches glued to a longer attribute name (e.g. `data-class=`).
    let at = loop {
        let i = lc[from..].find(&needle)? + from;
        let prev = lc[..i].chars().next_back();
        if prev.map_or(true, |ch| ch.is_ascii_whitespace() || ch == '<') {
            break i;
        }
        from = i + needle.len();
    };
    let val = open_tag[at + needle.len()..].trim_start();
    let (quote, start_off) = match val.as_bytes().first() {
        Some(b'"') => ('"', 1),
        Some(b'\'') => ('\'', 1),
        _ => ('\0', 0),
    };
    let end = if quote != '\0' {
        val[start_off..].find(quote).map(|e| start_off + e)
    } else {
        val.find(|c: char| c.is_ascii_whitespace() || c == '>' || c == '/')
    }
    .unwrap_or(val.len());
    Some(&val[start_off..end])
}

/// True when the block's opening tag lists `class_name` among its classes.
pub fn has_class(block: &str, class_name: &str) -> bool {
    attr_value(opener(block), "class")
        .map(|v| v.split_ascii_whitespace().any(|c| c.eq_ignore_ascii_case(class_name)))
        .unwrap_or(false)
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
