//! Rendering for the native player.
//!
//! The screen is split into the trail canvas on top and three status rows
//! at the bottom: main progress bar, sub (wait) progress bar, toolbar.

mod canvas;
mod status;

pub use canvas::{Canvas, Ink, Scale};
pub use status::{
    count_digits, filled_columns, main_bar_text, render_help, render_main_bar, render_sub_bar,
    render_toolbar, sub_bar_text,
};

use std::io::Write;

use anyhow::Result;

use crate::player::input::Toolbar;
use crate::player::trails::TrailBoard;

/// Rows reserved below the canvas.
pub const STATUS_LINES: u16 = 3;

/// Screen regions for a terminal of `cols` x `rows`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub cols: u16,
    pub rows: u16,
}

impl Layout {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }

    pub fn canvas_height(&self) -> u16 {
        self.rows.saturating_sub(STATUS_LINES)
    }

    pub fn main_bar_row(&self) -> u16 {
        self.rows.saturating_sub(3)
    }

    pub fn sub_bar_row(&self) -> u16 {
        self.rows.saturating_sub(2)
    }

    pub fn toolbar_row(&self) -> u16 {
        self.rows.saturating_sub(1)
    }

    /// Fraction of the log addressed by a click on `col` of the main bar.
    pub fn seek_fraction(&self, col: u16) -> f64 {
        if self.cols <= 1 {
            return 0.0;
        }
        (f64::from(col) / f64::from(self.cols - 1)).clamp(0.0, 1.0)
    }
}

/// Everything one frame draws besides the trails.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub progress: f64,
    pub next_line: usize,
    pub total_lines: usize,
    pub current_line: &'a str,
    pub wait_fraction: f64,
}

/// Draw a complete frame: canvas, both bars and the toolbar.
pub fn render_frame<W: Write>(
    out: &mut W,
    layout: &Layout,
    board: &mut TrailBoard,
    scale: &Scale,
    now: i64,
    view: &FrameView<'_>,
    toolbar: &Toolbar,
) -> Result<()> {
    let mut canvas = Canvas::new(layout.cols, layout.canvas_height());
    canvas.paint(board, scale, now);
    canvas.render(out)?;

    if layout.rows < STATUS_LINES {
        return Ok(());
    }

    let main_text = main_bar_text(view.next_line, view.total_lines, view.current_line);
    render_main_bar(
        out,
        layout.cols,
        layout.main_bar_row(),
        view.progress,
        &main_text,
    )?;
    render_sub_bar(
        out,
        layout.cols,
        layout.sub_bar_row(),
        view.wait_fraction,
        &sub_bar_text(view.wait_fraction, toolbar.paused()),
    )?;
    render_toolbar(out, layout.cols, layout.toolbar_row(), toolbar)?;
    Ok(())
}
