//! Progress bars, toolbar and help overlay for the native player.
//!
//! The main bar shows how far through the log playback is and the last
//! processed line; the sub bar shows progress through the current wait.

use std::io::Write;

use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};

use crate::player::input::Toolbar;

// ANSI color codes
const WHITE: &str = "\x1b[97m";
const DARK_GREY: &str = "\x1b[90m";
const CYAN: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";
const MAIN_FILL_BG: &str = "\x1b[42m";
const SUB_FILL_BG: &str = "\x1b[44m";
const EMPTY_BG: &str = "\x1b[48;5;236m";

/// Count digits in a number (for width calculation).
#[inline]
pub fn count_digits(n: usize) -> usize {
    if n == 0 {
        1
    } else {
        n.ilog10() as usize + 1
    }
}

/// Number of leading columns drawn as filled for `fraction` of `width`.
pub fn filled_columns(fraction: f64, width: u16) -> usize {
    let fraction = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    };
    (fraction * f64::from(width)).round() as usize
}

/// Text shown on the main bar: `next/total  line`.
pub fn main_bar_text(next_line: usize, total_lines: usize, line: &str) -> String {
    let width = count_digits(total_lines);
    format!(
        " {:>width$}/{}  {}",
        next_line,
        total_lines,
        line,
        width = width
    )
}

/// Text shown on the sub bar.
pub fn sub_bar_text(wait_fraction: f64, paused: bool) -> String {
    if paused {
        " paused".to_string()
    } else {
        format!(" wait {:>3.0}%", wait_fraction.clamp(0.0, 1.0) * 100.0)
    }
}

/// Draw a full-width bar with `text` over a filled/empty background.
pub fn render_bar<W: Write>(
    out: &mut W,
    width: u16,
    row: u16,
    fraction: f64,
    text: &str,
    fill_bg: &str,
) -> Result<()> {
    let filled = filled_columns(fraction, width);
    let mut output = String::with_capacity(width as usize * 2 + 32);
    output.push_str(&format!("\x1b[{};1H{}", row + 1, WHITE));

    let mut chars = text.chars();
    for col in 0..width as usize {
        if col == 0 {
            output.push_str(if filled > 0 { fill_bg } else { EMPTY_BG });
        } else if col == filled {
            output.push_str(EMPTY_BG);
        }
        output.push(chars.next().unwrap_or(' '));
    }

    output.push_str(RESET);
    write!(out, "{}", output)?;
    Ok(())
}

/// Main bar: line progress through the log.
pub fn render_main_bar<W: Write>(
    out: &mut W,
    width: u16,
    row: u16,
    progress: f64,
    text: &str,
) -> Result<()> {
    render_bar(out, width, row, progress, text, MAIN_FILL_BG)
}

/// Sub bar: progress through the current wait.
pub fn render_sub_bar<W: Write>(
    out: &mut W,
    width: u16,
    row: u16,
    wait_fraction: f64,
    text: &str,
) -> Result<()> {
    render_bar(out, width, row, wait_fraction, text, SUB_FILL_BG)
}

/// Render the toolbar buttons followed by keyboard hints.
pub fn render_toolbar<W: Write>(out: &mut W, width: u16, row: u16, toolbar: &Toolbar) -> Result<()> {
    let mut output = String::with_capacity(256);
    let mut visible_len: usize = 0; // Track visible width manually

    output.push_str(&format!("\x1b[{};1H", row + 1));

    for button in toolbar.buttons() {
        let pad = (button.start_col as usize).saturating_sub(visible_len);
        output.push_str(&" ".repeat(pad));
        output.push_str(CYAN);
        output.push_str(&button.label);
        visible_len = button.end_col() as usize;
    }

    let hints: [(&str, &str); 6] = [
        ("space", if toolbar.paused() { ":play " } else { ":pause " }),
        ("s", ":skip "),
        ("f", ":ff "),
        ("x", ":speed "),
        ("?", ":help "),
        ("q", ":quit"),
    ];
    output.push_str(DARK_GREY);
    output.push_str(" │ ");
    visible_len += 3;
    for (key, action) in hints {
        if visible_len + key.len() + action.len() > width as usize {
            break;
        }
        output.push_str(CYAN);
        output.push_str(key);
        output.push_str(DARK_GREY);
        output.push_str(action);
        visible_len += key.len() + action.len();
    }

    // Pad to full width to overwrite any leftover content
    let padding = (width as usize).saturating_sub(visible_len);
    output.push_str(&" ".repeat(padding));

    output.push_str(RESET);
    write!(out, "{}", output)?;
    Ok(())
}

const HELP_LINES: [&str; 21] = [
    "╔═══════════════════════════════════════════╗",
    "║          Multitouch Replay Help           ║",
    "╠═══════════════════════════════════════════╣",
    "║                                           ║",
    "║  Playback                                 ║",
    "║    Space      Pause / Resume              ║",
    "║    s / Tab    Skip the current wait       ║",
    "║    f          Fast forward N events       ║",
    "║    x / +      Cycle playback speed        ║",
    "║                                           ║",
    "║  Seeking                                  ║",
    "║    ← / →      Seek backward / forward 5%  ║",
    "║    Home/End   Go to start / end           ║",
    "║    Click bar  Seek to that position       ║",
    "║                                           ║",
    "║  General                                  ║",
    "║    ?          Show this help              ║",
    "║    q / Esc    Quit player                 ║",
    "║                                           ║",
    "║         Press any key to close            ║",
    "╚═══════════════════════════════════════════╝",
];

/// Render the help overlay centered on screen.
pub fn render_help<W: Write>(out: &mut W, width: u16, height: u16) -> Result<()> {
    let box_height = HELP_LINES.len() as u16;
    let box_width = HELP_LINES[0].chars().count() as u16;
    let start_row = height.saturating_sub(box_height) / 2;
    let col = width.saturating_sub(box_width) / 2;

    queue!(out, Clear(ClearType::All))?;
    for (i, line) in HELP_LINES.iter().enumerate() {
        queue!(
            out,
            MoveTo(col, start_row + i as u16),
            SetForegroundColor(Color::Green),
            Print(line),
            ResetColor,
        )?;
    }
    Ok(())
}
