//! Unit tests for the playback scheduler

use mtreplay::player::{ControlCommand, TrailDirective};
use mtreplay::PlaybackScheduler;

use crate::helpers::{empty_frames, line, load_fixture, log, memory_scheduler};

/// Read two commits `gap_ms` apart at `divisor` and return the wait window.
fn wait_window(gap_ms: u32, divisor: u32) -> i64 {
    let text = log(&[
        line(0.0, 0, 0, 0),
        line(f64::from(gap_ms) / 1000.0, 0, 0, 0),
    ]);
    let mut s = memory_scheduler(&text);
    s.set_speed_divisor(divisor);
    s.tick(0).unwrap();
    s.tick(0).unwrap();
    s.state().waiting_target().unwrap()
}

#[test]
fn wait_window_scales_with_speed() {
    for gap in [16, 100, 333, 1000] {
        let base = wait_window(gap, 1);
        assert_eq!(base, i64::from(gap));
        for divisor in 2..=6 {
            let scaled = wait_window(gap, divisor);
            let expected = base as f64 / f64::from(divisor);
            assert!(
                (scaled as f64 - expected).abs() <= 0.5,
                "gap {} divisor {}: {} vs {}",
                gap,
                divisor,
                scaled,
                expected
            );
        }
    }
}

#[test]
fn skip_events_discards_lines_without_decoding() {
    let mut text = String::from("not a record\nnor this\nnor that\n");
    text.push_str(&empty_frames(7, 10));
    let mut s = memory_scheduler(&text);
    assert_eq!(s.total_lines(), 10);

    assert_eq!(s.skip_events(3).unwrap(), 3);
    assert_eq!(s.next_line_index(), 3);
    assert!(s.slots().is_empty());
    assert!(s.tick(0).unwrap().is_some());
}

#[test]
fn skip_events_past_end_stops_at_end() {
    let mut s = memory_scheduler(&empty_frames(4, 10));
    assert_eq!(s.skip_events(10).unwrap(), 4);
    s.tick(0).unwrap();
    assert!(s.tick(0).unwrap().is_none());
}

#[test]
fn fast_forward_command_collapses_wait() {
    let mut s = memory_scheduler(&empty_frames(6, 500));
    s.tick(0).unwrap();
    s.tick(0).unwrap();
    assert!(s.state().is_waiting());

    s.apply(ControlCommand::SkipEvents(2), 1).unwrap();
    s.tick(1).unwrap();
    assert!(!s.state().is_waiting());
    assert_eq!(s.next_line_index(), 5);
}

#[test]
fn progress_follows_lines() {
    let mut s = memory_scheduler(&empty_frames(4, 0));
    assert_eq!(s.progress(), 0.0);
    s.tick(0).unwrap();
    assert_eq!(s.progress(), 0.25);
    s.seek_to_fraction(1.0, 0).unwrap();
    assert_eq!(s.progress(), 1.0);
}

#[test]
fn current_line_is_trimmed() {
    let mut s = memory_scheduler(&empty_frames(2, 0));
    s.tick(0).unwrap();
    assert_eq!(s.current_line(), "2024/01/01 00:00:00.000000 0 0 0");
}

/// Tick once per millisecond until the log ends, returning the end time.
fn run_to_end<R: std::io::BufRead + std::io::Seek>(
    s: &mut PlaybackScheduler<R>,
    directives: &mut Vec<TrailDirective>,
) -> i64 {
    let mut now = 0;
    while s.tick(now).unwrap().is_some() {
        directives.extend(s.take_directives());
        now += 1;
    }
    directives.extend(s.take_directives());
    now
}

#[test]
fn swipe_fixture_plays_at_recorded_pace() {
    let mut s = memory_scheduler(&load_fixture("swipe.log"));
    let mut directives = Vec::new();
    let end = run_to_end(&mut s, &mut directives);

    let fades: Vec<i64> = directives
        .iter()
        .filter_map(|d| match d {
            TrailDirective::FadePersistentTrail {
                slot: Some(_),
                timestamp: Some(ts),
            } => Some(*ts),
            _ => None,
        })
        .collect();
    let segments = directives
        .iter()
        .filter(|d| matches!(d, TrailDirective::AddTrail { .. }))
        .count();

    // Each 16ms recorded gap is waited out after the commit line is read
    assert_eq!(fades, vec![84, 103]);
    assert_eq!(segments, 5);
    assert_eq!(end, 103);
}

#[test]
fn double_speed_halves_playback() {
    let mut s = memory_scheduler(&load_fixture("swipe.log"));
    s.apply(ControlCommand::SetPlaybackSpeedMultiplier(2), 0).unwrap();
    let mut directives = Vec::new();
    let end = run_to_end(&mut s, &mut directives);

    // The tick that ends a wait also reads the next line
    assert_eq!(end, 28 + 5 * (8 - 1));
}
