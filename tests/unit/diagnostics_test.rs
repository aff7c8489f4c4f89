//! Unit tests for the warnings emitted on recoverable log anomalies

use mtreplay::decoder::{EventDecoder, Slot, SlotTable};
use mtreplay::player::diff::diff_slots;

use crate::helpers::{capture_logs, line};

fn decode_logged(lines: &[String]) -> String {
    capture_logs(|| {
        let mut decoder = EventDecoder::new();
        for l in lines {
            decoder.decode(l).unwrap();
        }
    })
}

#[test]
fn unread_commit_is_logged() {
    let logs = decode_logged(&[line(0.0, 0, 0, 0), line(0.25, 0, 0, 0)]);

    assert!(logs.contains("WARN"));
    assert!(logs.contains("Unread SYN_REPORT overwritten"));
    assert!(logs.contains("previous="));
    assert!(logs.contains("timestamp="));
}

#[test]
fn consumed_commit_is_not_logged() {
    let logs = capture_logs(|| {
        let mut decoder = EventDecoder::new();
        decoder.decode(&line(0.0, 0, 0, 0)).unwrap();
        decoder.consume_ready();
        decoder.decode(&line(0.25, 0, 0, 0)).unwrap();
    });

    assert!(!logs.contains("Unread SYN_REPORT"));
}

#[test]
fn unhandled_abs_code_is_logged() {
    let logs = decode_logged(&[line(0.0, 3, 0x30, 9)]);

    assert!(logs.contains("Unhandled EV_ABS code"));
    assert!(logs.contains("code=48"));
    assert!(logs.contains("value=9"));
}

#[test]
fn unhandled_event_is_logged() {
    let logs = decode_logged(&[line(0.0, 4, 4, 0x90001)]);

    assert!(logs.contains("Unhandled event"));
    assert!(logs.contains("event_type=4"));
    assert!(logs.contains("code=4"));
}

#[test]
fn other_key_codes_are_logged() {
    let logs = decode_logged(&[line(0.0, 1, 0x145, 1)]);
    assert!(logs.contains("Unhandled event"));
}

#[test]
fn touch_button_is_silent() {
    let logs = decode_logged(&[line(0.0, 1, 0x14a, 1), line(0.0, 1, 0x14a, 0)]);
    assert_eq!(logs, "");
}

#[test]
fn well_formed_frame_is_silent() {
    let logs = decode_logged(&[
        line(0.0, 3, 0x2f, 0),
        line(0.0, 3, 0x39, 5),
        line(0.0, 3, 0x35, 100),
        line(0.0, 3, 0x36, 200),
        line(0.0, 0, 0, 0),
    ]);
    assert_eq!(logs, "");
}

#[test]
fn bogus_slot_is_logged_during_diff() {
    let current: SlotTable = [(
        2,
        Slot {
            tracking_id: Some(7),
            x: Some(10),
            y: None,
        },
    )]
    .into_iter()
    .collect();

    let mut out = Vec::new();
    let logs = capture_logs(|| diff_slots(&current, &SlotTable::new(), 0, &mut out));

    assert!(out.is_empty());
    assert!(logs.contains("Bogus slot: tracking id without coordinates"));
    assert!(logs.contains("slot=2"));
    assert!(logs.contains("tracking_id=7"));
}
