//! Trail canvas for the native player.
//!
//! Touch coordinates are scaled from the device's resolution to a grid of
//! terminal cells. Fading trails are shaded by opacity, persistent trails
//! (fingers still down) are drawn solid on top.

use std::io::Write;

use anyhow::Result;

use crate::player::diff::Point;
use crate::player::trails::TrailBoard;

/// Maps device coordinates onto a `width` x `height` cell grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scale {
    pub x_resolution: u32,
    pub y_resolution: u32,
    pub width: u16,
    pub height: u16,
}

impl Scale {
    pub fn new(x_resolution: u32, y_resolution: u32, width: u16, height: u16) -> Self {
        Self {
            x_resolution: x_resolution.max(2),
            y_resolution: y_resolution.max(2),
            width,
            height,
        }
    }

    /// Cell holding `point`; coordinates beyond the resolution clamp to the edge.
    pub fn map(&self, point: Point) -> (u16, u16) {
        (
            scale_axis(point.x, self.x_resolution, self.width),
            scale_axis(point.y, self.y_resolution, self.height),
        )
    }
}

fn scale_axis(value: u32, resolution: u32, cells: u16) -> u16 {
    let last_cell = u64::from(cells.saturating_sub(1));
    let scaled = u64::from(value) * last_cell / u64::from(resolution - 1);
    scaled.min(last_cell) as u16
}

/// One painted cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ink {
    Fading(u8),
    Persistent,
}

impl Ink {
    fn glyph(self) -> char {
        match self {
            Ink::Persistent => '█',
            Ink::Fading(alpha) if alpha > 170 => '▓',
            Ink::Fading(alpha) if alpha > 85 => '▒',
            Ink::Fading(_) => '░',
        }
    }

    /// 256-color palette entry: grayscale ramp for fading, bright cyan for persistent.
    fn color(self) -> u8 {
        match self {
            Ink::Persistent => 51,
            Ink::Fading(alpha) => 232 + (u16::from(alpha) * 23 / 255) as u8,
        }
    }

    fn stronger(self, other: Ink) -> Ink {
        match (self, other) {
            (Ink::Persistent, _) | (_, Ink::Persistent) => Ink::Persistent,
            (Ink::Fading(a), Ink::Fading(b)) => Ink::Fading(a.max(b)),
        }
    }
}

/// Cell grid the trails are rasterized into before being written out.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<Option<Ink>>,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![None; usize::from(width) * usize::from(height)],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, col: u16, row: u16) -> Option<Ink> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.cells[self.index(col, row)]
    }

    /// Paint one cell, keeping whichever ink is stronger.
    pub fn plot(&mut self, col: u16, row: u16, ink: Ink) {
        if col >= self.width || row >= self.height {
            return;
        }
        let idx = self.index(col, row);
        self.cells[idx] = Some(match self.cells[idx] {
            Some(existing) => existing.stronger(ink),
            None => ink,
        });
    }

    /// Bresenham line between two cells, both ends included.
    pub fn line(&mut self, from: (u16, u16), to: (u16, u16), ink: Ink) {
        let (mut x0, mut y0) = (i32::from(from.0), i32::from(from.1));
        let (x1, y1) = (i32::from(to.0), i32::from(to.1));
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x0 as u16, y0 as u16, ink);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Rasterize the board's live trails at `now`, pruning expired ones.
    pub fn paint(&mut self, board: &mut TrailBoard, scale: &Scale, now: i64) {
        for (trail, alpha) in board.visible_trails(now) {
            self.segment(scale, trail.start, trail.end, Ink::Fading(alpha));
        }
        for (_, trail) in board.persistent() {
            self.segment(scale, trail.start, trail.end, Ink::Persistent);
        }
    }

    fn segment(&mut self, scale: &Scale, start: Option<Point>, end: Point, ink: Ink) {
        let to = scale.map(end);
        match start {
            Some(start) => self.line(scale.map(start), to, ink),
            None => self.plot(to.0, to.1, ink),
        }
    }

    /// Glyphs only, one line per row, `.` for blank cells.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + usize::from(self.height));
        for row in 0..self.height {
            for col in 0..self.width {
                out.push(self.get(col, row).map_or('.', Ink::glyph));
            }
            out.push('\n');
        }
        out
    }

    /// Write the canvas at the top of the screen, overwriting every cell.
    pub fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        // Build output string to minimize syscalls
        let mut output = String::with_capacity(self.cells.len() * 4);
        for row in 0..self.height {
            output.push_str(&format!("\x1b[{};1H", row + 1));
            let mut current: Option<u8> = None;
            for col in 0..self.width {
                match self.get(col, row) {
                    Some(ink) => {
                        let color = ink.color();
                        if current != Some(color) {
                            output.push_str(&format!("\x1b[38;5;{}m", color));
                            current = Some(color);
                        }
                        output.push(ink.glyph());
                    }
                    None => output.push(' '),
                }
            }
            if current.is_some() {
                output.push_str("\x1b[0m");
            }
        }
        write!(out, "{}", output)?;
        Ok(())
    }

    #[inline]
    fn index(&self, col: u16, row: u16) -> usize {
        usize::from(row) * usize::from(self.width) + usize::from(col)
    }
}
