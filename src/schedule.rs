// src/schedule.rs
//! Schedule/location text normalization.
//!
//! The place cell packs days, periods and rooms into one compact string:
//!
//! ```text
//! 월1,2,3,금1,2,3(가303)      -> 월1 월2 월3 금1 금2 금3 @ 가303
//! 월1(A101)/화2(B202)         -> 월1 화2 @ A101, B202
//! 월1,2                       -> 월1 월2 @ ""
//! ```
//!
//! A bare period number inherits the most recent day marker. The marker carries
//! across `/` segments: a room change does not reset the day. Rooms are kept one
//! per segment, so `rooms.len()` always equals the segment count.

use std::fmt;

use crate::config::consts::{DAY_MARKERS, FIRST_DAY};
use crate::error::{CrawlError, CrawlResult};

/// One (day, period) attendance unit, rendered `<day><period>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Session {
    pub day: char,
    pub period: String,
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.day, self.period)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Schedule {
    pub sessions: Vec<Session>,
    /// One entry per `/` segment; `""` when the segment names no room.
    pub rooms: Vec<String>,
}

impl Schedule {
    /// Sessions as the comma-joined `월1,월2,...` form.
    pub fn time(&self) -> String {
        self.sessions
            .iter()
            .map(Session::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Rooms comma-joined, one entry per segment.
    pub fn classroom(&self) -> String {
        self.rooms.join(",")
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty() && self.rooms.is_empty()
    }
}

/// Decode raw place text into sessions and rooms.
///
/// Any token that is neither `<digits>` nor `<day><digits>` fails the whole
/// string with `ScheduleParse`. Blank text is one empty token, so it fails too.
pub fn normalize_schedule(raw: &str) -> CrawlResult<Schedule> {
    let malformed = || CrawlError::ScheduleParse { raw: s!(raw) };

    let mut day = FIRST_DAY;
    let mut out = Schedule::default();

    for segment in raw.split('/') {
        let (days, room) = split_room(segment).ok_or_else(malformed)?;
        out.rooms.push(s!(room.trim()));

        for token in days.split(',') {
            let session = read_token(token.trim(), &mut day).ok_or_else(malformed)?;
            out.sessions.push(session);
        }
    }
    Ok(out)
}

/// `월1,2(가303)` → (`월1,2`, `가303`). Room spans the first `(` to the last `)`.
/// `None` when a `(` is never closed.
fn split_room(segment: &str) -> Option<(&str, &str)> {
    match segment.find('(') {
        None => Some((segment, "")),
        Some(open) => {
            let close = segment.rfind(')').filter(|&c| c > open)?;
            Some((&segment[..open], &segment[open + 1..close]))
        }
    }
}

/// One comma token. Updates the running day on a `<day><digits>` token.
fn read_token(token: &str, day: &mut char) -> Option<Session> {
    if is_digits(token) {
        return Some(Session { day: *day, period: s!(token) });
    }
    let mut chars = token.chars();
    let marker = chars.next()?;
    let period = chars.as_str();
    if !DAY_MARKERS.contains(&marker) || !is_digits(period) {
        return None;
    }
    *day = marker;
    Some(Session { day: marker, period: s!(period) })
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn times(raw: &str) -> Vec<String> {
        normalize_schedule(raw).unwrap().sessions.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_periods_default_to_monday() {
        assert_eq!(times("1,2(A)"), vec!["월1", "월2"]);
    }

    #[test]
    fn marker_carries_across_segments() {
        let sch = normalize_schedule("화1,2(A101)/3(B202)").unwrap();
        assert_eq!(sch.time(), "화1,화2,화3");
        assert_eq!(sch.rooms, vec!["A101", "B202"]);
    }

    #[test]
    fn room_spans_to_last_paren() {
        let sch = normalize_schedule("수5(60주년(하)101)").unwrap();
        assert_eq!(sch.time(), "수5");
        assert_eq!(sch.rooms, vec!["60주년(하)101"]);
    }

    #[test]
    fn multi_digit_periods_and_spaces() {
        assert_eq!(times("목10, 11 ,12(5남108)"), vec!["목10", "목11", "목12"]);
    }

    #[test]
    fn blank_text_is_malformed() {
        for raw in ["", "   "] {
            let err = normalize_schedule(raw).unwrap_err();
            assert!(matches!(err, CrawlError::ScheduleParse { raw: r } if r == raw));
        }
    }

    #[test]
    fn marker_must_be_a_day() {
        assert!(normalize_schedule("월1,-2(A)").is_err());
        assert!(normalize_schedule("X3").is_err());
        assert_eq!(times("토1/일2"), vec!["토1", "일2"]);
        assert_eq!(times("웹1,2"), vec!["웹1", "웹2"]);
    }

    #[test]
    fn segment_with_only_room_is_malformed() {
        assert!(normalize_schedule("(가303)").is_err());
    }

    #[test]
    fn unclosed_room_is_malformed() {
        let err = normalize_schedule("월1(가303").unwrap_err();
        assert!(matches!(err, CrawlError::ScheduleParse { raw } if raw == "월1(가303"));
    }

    #[test]
    fn bad_tokens_are_malformed() {
        for raw in ["월1,,2", "월", "1a", "월화1", "월1,x(A)", "월1(A)/"] {
            assert!(
                matches!(normalize_schedule(raw), Err(CrawlError::ScheduleParse { .. })),
                "{raw:?} should fail"
            );
        }
    }
}
