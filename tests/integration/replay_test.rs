//! Headless replay: scheduler, frame quota, trail board and canvas together

use std::io::Cursor;

use crossterm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use mtreplay::player::input::{handle_event, InputResult, PlayerInput, Toolbar};
use mtreplay::player::render::{Canvas, Ink, Layout, Scale};
use mtreplay::player::{ControlCommand, FrameQuota, TrailBoard};
use mtreplay::{Config, PlaybackScheduler};

use crate::helpers::{fixtures_dir, SteppingClock};

fn swipe_scheduler() -> PlaybackScheduler<Cursor<Vec<u8>>> {
    let bytes = std::fs::read(fixtures_dir().join("swipe.log")).unwrap();
    PlaybackScheduler::load(Cursor::new(bytes)).unwrap()
}

#[test]
fn frame_loop_plays_swipe_to_the_end() {
    let config = Config::default();
    let clock = SteppingClock::default();
    let mut scheduler = swipe_scheduler();
    let mut quota = FrameQuota::new(i64::from(config.playback.initial_quota_ms), 0);
    let mut board = TrailBoard::new(i64::from(config.display.trail_fade_ms));

    let mut finished = false;
    for _ in 0..1_000 {
        clock.advance(8);
        let status = quota.run_frame(&mut scheduler, &clock).unwrap();
        board.apply_all(scheduler.take_directives());
        if status.end_of_log {
            finished = true;
            break;
        }
        quota.end_frame(clock.peek());
    }

    assert!(finished);
    assert!(clock.peek() >= 80, "finished after {}ms", clock.peek());
    assert_eq!(scheduler.progress(), 1.0);
    // Both fingers lifted: five segments plus the two faded markers
    assert_eq!(board.persistent_count(), 0);
    assert_eq!(board.trail_count(), 7);
}

#[test]
fn paused_frame_loop_makes_no_progress() {
    let clock = SteppingClock::default();
    let mut scheduler = swipe_scheduler();
    scheduler.pause(true);
    let mut quota = FrameQuota::new(8, 0);

    for _ in 0..10 {
        clock.advance(8);
        quota.run_frame(&mut scheduler, &clock).unwrap();
        quota.end_frame(clock.peek());
    }
    assert_eq!(scheduler.next_line_index(), 0);
}

#[test]
fn canvas_shows_two_fingers_mid_swipe() {
    let mut scheduler = swipe_scheduler();
    let mut board = TrailBoard::new(1_000);
    for now in 0..=55 {
        scheduler.tick(now).unwrap();
        board.apply_all(scheduler.take_directives());
    }
    assert_eq!(board.persistent_count(), 2);

    let scale = Scale::new(17_280, 38_400, 20, 10);
    let mut canvas = Canvas::new(20, 10);
    canvas.paint(&mut board, &scale, 55);

    assert_eq!(canvas.get(9, 4), Some(Ink::Persistent));
    assert_eq!(canvas.get(10, 5), Some(Ink::Persistent));
    assert!(matches!(canvas.get(8, 4), Some(Ink::Fading(_))));
    assert_eq!(canvas.get(0, 0), None);
}

#[test]
fn trails_expire_after_fade_time() {
    let mut scheduler = swipe_scheduler();
    let mut board = TrailBoard::new(100);
    let mut now = 0;
    while scheduler.tick(now).unwrap().is_some() {
        board.apply_all(scheduler.take_directives());
        now += 1;
    }
    board.apply_all(scheduler.take_directives());

    let scale = Scale::new(17_280, 38_400, 20, 10);
    let mut canvas = Canvas::new(20, 10);
    canvas.paint(&mut board, &scale, now + 100);

    assert_eq!(board.trail_count(), 0);
    assert!(canvas.to_plain_text().chars().all(|c| c == '.' || c == '\n'));
}

#[test]
fn progress_bar_click_seeks_scheduler() {
    let mut scheduler = swipe_scheduler();
    let layout = Layout::new(101, 24);
    let mut input = PlayerInput::new(Toolbar::new(1, 10, 20), layout);

    let click = Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 50,
        row: layout.main_bar_row(),
        modifiers: KeyModifiers::NONE,
    });
    let result = handle_event(click, &mut input);
    let InputResult::Command(command) = result else {
        panic!("expected a command, got {:?}", result);
    };
    scheduler.apply(command, 0).unwrap();

    assert_eq!(scheduler.next_line_index(), 14);
    assert!(scheduler.state().skip_wait_pending());
}

#[test]
fn seek_while_paused_keeps_trails_fading() {
    let mut scheduler = swipe_scheduler();
    let mut board = TrailBoard::new(1_000);
    for now in 0..=10 {
        scheduler.tick(now).unwrap();
        board.apply_all(scheduler.take_directives());
    }
    assert_eq!(board.persistent_count(), 1);

    // The host stops ticking while paused but its clock keeps running
    scheduler.apply(ControlCommand::Paused(true), 20).unwrap();
    scheduler
        .apply(ControlCommand::SetFilePosition(0.5), 5_100)
        .unwrap();
    board.apply_all(scheduler.take_directives());

    assert_eq!(board.persistent_count(), 0);
    assert_eq!(board.visible_trails(5_100).len(), 1);
    let faded = board.visible_trails(5_600);
    assert_eq!(faded.len(), 1);
    assert_eq!(faded[0].1, 128);
}
