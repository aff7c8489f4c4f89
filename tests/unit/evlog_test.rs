//! Unit tests for log statistics and frame listing

use mtreplay::evlog::{collect_frames, LineCursor, LogError, LogStats, RawEvent, EV_ABS};

use crate::helpers::{fixtures_dir, memory_cursor};

fn fixture_cursor(name: &str) -> LineCursor<std::io::BufReader<std::fs::File>> {
    LineCursor::open(fixtures_dir().join(name)).unwrap()
}

#[test]
fn swipe_stats() {
    let stats = LogStats::collect(&mut fixture_cursor("swipe.log")).unwrap();

    assert_eq!(stats.lines, 28);
    assert_eq!(stats.commits, 6);
    assert_eq!(stats.duration_ms(), 80);
    assert_eq!(stats.slots_allocated, 2);
    assert_eq!(stats.peak_contacts, 2);
    assert_eq!(stats.unhandled_records, 1);
}

#[test]
fn swipe_summary_text() {
    let stats = LogStats::collect(&mut fixture_cursor("swipe.log")).unwrap();
    let summary = stats.summary();

    assert!(summary.contains("Frames: 6"));
    assert!(summary.contains("Duration: 00:00.080"));
    assert!(summary.contains("Peak contacts: 2"));
}

#[test]
fn malformed_fixture_reports_line_three() {
    let err = LogStats::collect(&mut fixture_cursor("malformed.log")).unwrap_err();
    match err {
        LogError::MalformedRecord { line, reason } => {
            assert_eq!(line, 3);
            assert!(reason.contains("zz"));
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn swipe_frames() {
    let rows = collect_frames(&mut fixture_cursor("swipe.log"), None).unwrap();
    let text: Vec<String> = rows.iter().map(|r| r.to_string()).collect();

    assert_eq!(
        text,
        vec![
            "+0ms  1 contact  slot 0 id 26 (8000, 20000)",
            "+16ms  1 contact  slot 0 id 26 (8200, 19800)",
            "+32ms  2 contacts  slot 0 id 26 (8400, 19800)  slot 1 id 27 (10000, 25000)",
            "+48ms  2 contacts  slot 0 id 26 (8400, 19600)  slot 1 id 27 (10000, 24800)",
            "+64ms  1 contact  slot 1 id 27 (10000, 24800)",
            "+80ms  0 contacts",
        ]
    );
}

#[test]
fn frames_limit_stops_early() {
    let mut cursor = fixture_cursor("swipe.log");
    let rows = collect_frames(&mut cursor, Some(2)).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(cursor.next_line_index(), 10);
}

#[test]
fn frames_of_log_without_commits_is_empty() {
    let mut cursor = memory_cursor("2024/01/01 00:00:00.000000 3 39 1\n");
    assert!(collect_frames(&mut cursor, None).unwrap().is_empty());
}

#[test]
fn parse_line_accepts_extra_whitespace() {
    let event = RawEvent::parse_line("2024/01/01   00:00:00.000000\t3  35   1f40").unwrap();
    assert_eq!(event.event_type, EV_ABS);
    assert_eq!(event.code, 0x35);
    assert_eq!(event.value, 8000);
}

#[test]
fn parse_line_rejects_wrong_field_count() {
    assert!(RawEvent::parse_line("2024/01/01 00:00:00.000000 3 35 1 2").is_err());
    assert!(RawEvent::parse_line("").is_err());
}

#[test]
fn parse_line_rejects_bad_timestamp() {
    assert!(RawEvent::parse_line("2024-01-01 00:00:00.000000 3 35 1").is_err());
    assert!(RawEvent::parse_line("2024/01/01 25:00:00.000000 3 35 1").is_err());
}
