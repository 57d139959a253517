// tests/normalize_schedule.rs
//
// Behavior of the schedule/location normalizer on the notations the site emits.
//
use sugang_scrape::{normalize_schedule, CrawlError};

fn times(raw: &str) -> Vec<String> {
    normalize_schedule(raw).unwrap().sessions.iter().map(|s| s.to_string()).collect()
}

#[test]
fn marker_then_periods_share_marker_and_room() {
    for (marker, room) in [("월", "가303"), ("화", "5남108"), ("금", "60주년-901")] {
        let raw = format!("{marker}4,5,6({room})");
        let sch = normalize_schedule(&raw).unwrap();
        assert_eq!(sch.sessions.len(), 3);
        assert!(sch.sessions.iter().all(|s| s.day.to_string() == marker));
        assert_eq!(sch.rooms, vec![room]);
    }
}

#[test]
fn day_carries_forward_within_segment() {
    let sch = normalize_schedule("월1,2,3,금1,2,3(가303)").unwrap();
    assert_eq!(times("월1,2,3,금1,2,3(가303)"), vec!["월1", "월2", "월3", "금1", "금2", "금3"]);
    assert_eq!(sch.rooms, vec!["가303"]);
    assert_eq!(sch.time(), "월1,월2,월3,금1,금2,금3");
    assert_eq!(sch.classroom(), "가303");
}

#[test]
fn one_room_per_segment() {
    let sch = normalize_schedule("월1(A101)/화2(B202)").unwrap();
    assert_eq!(times("월1(A101)/화2(B202)"), vec!["월1", "화2"]);
    assert_eq!(sch.rooms, vec!["A101", "B202"]);
    assert_eq!(sch.classroom(), "A101,B202");
}

#[test]
fn segment_without_room_gets_empty_room() {
    let sch = normalize_schedule("월1,2").unwrap();
    assert_eq!(sch.time(), "월1,월2");
    assert_eq!(sch.rooms, vec![""]);

    let sch = normalize_schedule("월1(A101)/수3").unwrap();
    assert_eq!(sch.rooms, vec!["A101", ""]);
}

#[test]
fn rooms_follow_segments_not_sessions() {
    let sch = normalize_schedule("월1,2,3(A)/목7,8(B)/9").unwrap();
    assert_eq!(sch.sessions.len(), 6);
    assert_eq!(sch.rooms.len(), 3);
    assert_eq!(sch.time(), "월1,월2,월3,목7,목8,목9");
}

#[test]
fn same_input_same_output() {
    let raw = "화5,6,목5(하-232)/7(2남-501)";
    let first = normalize_schedule(raw).unwrap();
    for _ in 0..5 {
        assert_eq!(normalize_schedule(raw).unwrap(), first);
    }
}

#[test]
fn malformed_token_carries_raw_text() {
    for raw in ["월1,A(가303)", "월1,2-3", "월1,,2(가303)", "월1(A101)/(B202)"] {
        match normalize_schedule(raw) {
            Err(CrawlError::ScheduleParse { raw: got }) => assert_eq!(got, raw),
            other => panic!("{raw:?} gave {other:?}"),
        }
    }
}
