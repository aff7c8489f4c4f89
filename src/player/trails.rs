//! Renderer-side trail store.
//!
//! Holds what the trail canvas draws: fading segments that disappear after
//! the configured fade time, and one persistent marker per touch slot that
//! stays until the slot's contact lifts or changes.

use std::collections::BTreeMap;

use super::diff::{Point, TrailDirective};

/// A fading segment, or a dot when `start` is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trail {
    pub start: Option<Point>,
    pub end: Point,
    /// Wall-clock time the trail was laid down
    pub timestamp: i64,
}

/// Current marker of a touching finger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersistentTrail {
    pub start: Option<Point>,
    pub end: Point,
}

/// Fading and persistent trails owned by one renderer.
#[derive(Debug, Clone)]
pub struct TrailBoard {
    trails: Vec<Trail>,
    persistent: BTreeMap<u32, PersistentTrail>,
    fade_ms: i64,
}

impl TrailBoard {
    pub fn new(fade_ms: i64) -> Self {
        Self {
            trails: Vec::new(),
            persistent: BTreeMap::new(),
            fade_ms: fade_ms.max(1),
        }
    }

    pub fn apply(&mut self, directive: TrailDirective) {
        match directive {
            TrailDirective::AddTrail {
                start,
                end,
                timestamp,
            } => self.add_trail(start, end, timestamp),
            TrailDirective::AddPersistentTrail { start, end, slot } => {
                self.add_persistent_trail(start, end, slot)
            }
            TrailDirective::FadePersistentTrail { slot, timestamp } => {
                self.fade_persistent_trail(slot, timestamp)
            }
        }
    }

    pub fn apply_all(&mut self, directives: impl IntoIterator<Item = TrailDirective>) {
        for directive in directives {
            self.apply(directive);
        }
    }

    pub fn add_trail(&mut self, start: Option<Point>, end: Point, timestamp: i64) {
        self.trails.push(Trail {
            start,
            end,
            timestamp,
        });
    }

    pub fn add_persistent_trail(&mut self, start: Option<Point>, end: Point, slot: u32) {
        self.persistent.insert(slot, PersistentTrail { start, end });
    }

    /// Remove the persistent trail of `slot`, or of every slot when `None`.
    ///
    /// With a timestamp, removed trails continue as fading trails from that time.
    pub fn fade_persistent_trail(&mut self, slot: Option<u32>, timestamp: Option<i64>) {
        let removed: Vec<PersistentTrail> = match slot {
            Some(slot) => self.persistent.remove(&slot).into_iter().collect(),
            None => std::mem::take(&mut self.persistent).into_values().collect(),
        };
        if let Some(timestamp) = timestamp {
            for trail in removed {
                self.add_trail(trail.start, trail.end, timestamp);
            }
        }
    }

    /// Opacity of a trail at `now`, 255 when fresh and <= 0 once expired.
    pub fn alpha(&self, trail: &Trail, now: i64) -> i64 {
        fade_alpha(trail.timestamp, now, self.fade_ms)
    }

    /// Drop expired trails and return the rest with their opacity.
    pub fn visible_trails(&mut self, now: i64) -> Vec<(Trail, u8)> {
        let fade_ms = self.fade_ms;
        self.trails
            .retain(|t| fade_alpha(t.timestamp, now, fade_ms) > 0);
        self.trails
            .iter()
            .map(|t| (*t, fade_alpha(t.timestamp, now, fade_ms) as u8))
            .collect()
    }

    pub fn persistent(&self) -> impl Iterator<Item = (u32, &PersistentTrail)> {
        self.persistent.iter().map(|(slot, trail)| (*slot, trail))
    }

    pub fn trail_count(&self) -> usize {
        self.trails.len()
    }

    pub fn persistent_count(&self) -> usize {
        self.persistent.len()
    }
}

fn fade_alpha(timestamp: i64, now: i64, fade_ms: i64) -> i64 {
    let age = (now - timestamp) as f64;
    let alpha = (255.0 * (1.0 - age / fade_ms as f64)).round() as i64;
    alpha.min(255)
}
