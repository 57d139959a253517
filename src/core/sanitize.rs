// src/core/sanitize.rs

pub const NBSP_ENTITY: &str = "&nbsp;";

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Note cells arrive as `&nbsp;` padding and comma-joined remarks.
/// Drop every `&nbsp;`, then at most one trailing comma.
pub fn clean_note(s: &str) -> String {
    let out = s.replace(NBSP_ENTITY, "");
    match out.strip_suffix(',') {
        Some(trimmed) => trimmed.to_string(),
        None => out,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_ws_collapses_runs() {
        assert_eq!(normalize_ws("  a \t\n b  "), "a b");
    }

    #[test]
    fn clean_note_variants() {
        assert_eq!(clean_note("&nbsp;"), "");
        assert_eq!(clean_note("영어강의,"), "영어강의");
        assert_eq!(clean_note("영어강의,,"), "영어강의,");
        assert_eq!(clean_note("A,&nbsp;B&nbsp;"), "A,B");
        assert_eq!(clean_note("원어,&nbsp;"), "원어");
    }
}
