//! CLI definitions for mtreplay
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so command handlers (completions) can build the command tree.

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

/// Build clap styles.
///
/// - Green: headers, usage, command names
/// - White: descriptions, placeholders
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "mtreplay")]
#[command(about = "[ Multitouch Replay ] - replay recorded touchscreen event logs in real time")]
#[command(
    long_about = "Multitouch Replay (mtreplay) - replay recorded multitouch input event logs.

Logs are plain text, one input event per line:
    <YYYY/MM/DD> <HH:MM:SS.ffffff> <type hex> <code hex> <value hex>

Touches are decoded with the multi-touch slot protocol and drawn as fading
trails at the speed they were recorded.

QUICK START:
    mtreplay play touch.log          Replay a log in the terminal
    mtreplay info touch.log          Summarize a log
    mtreplay frames touch.log        Print decoded frames without timing"
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Append diagnostics to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Enable debug diagnostics
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay a log in the terminal
    #[command(long_about = "Replay a touch log in a full-screen terminal view.

Recorded gaps between frames are reproduced against the wall clock,
divided by the speed multiplier.

CONTROLS:
    space     Pause / resume
    s         Skip the current wait
    f         Fast forward (playback.fast_forward_events lines)
    x         Cycle speed 1x..max
    ←/→       Seek 5%
    click     Seek on the main progress bar
    q         Quit

EXAMPLES:
    mtreplay play touch.log
    mtreplay play touch.log --speed 4 --start 0.5")]
    Play(PlayArgs),

    /// Print decoded frames without timing
    #[command(long_about = "Decode a log without waiting and print one row per frame.

Each row shows the time since the first frame, the number of touching
contacts, and each contact's slot, tracking id and position.

EXAMPLE:
    mtreplay frames touch.log --limit 20")]
    Frames {
        /// Path to the event log
        file: PathBuf,
        /// Stop after this many frames
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },

    /// Summarize a log
    #[command(long_about = "Print statistics for a log: line and frame counts,
duration, slots used, peak simultaneous contacts and unhandled records.

EXAMPLES:
    mtreplay info touch.log
    mtreplay info touch.log --json")]
    Info {
        /// Path to the event log
        file: PathBuf,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(long, value_enum)]
        shell: CompletionShell,
    },
}

/// Options of the `play` command.
#[derive(Args, Debug, Clone)]
pub struct PlayArgs {
    /// Path to the event log
    pub file: PathBuf,

    /// Initial speed multiplier
    #[arg(long, short, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub speed: u32,

    /// Start position as a fraction of the log (0.0 - 1.0)
    #[arg(long, default_value_t = 0.0, value_parser = parse_fraction)]
    pub start: f64,

    /// Device X resolution (overrides config)
    #[arg(long)]
    pub x_res: Option<u32>,

    /// Device Y resolution (overrides config)
    #[arg(long)]
    pub y_res: Option<u32>,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    #[command(long_about = "Display the effective configuration in TOML format.

Values missing from the config file are shown with their defaults.

EXAMPLE:
    mtreplay config show")]
    Show,
    /// Print the configuration file location
    Path,
}

fn parse_fraction(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{} is not between 0.0 and 1.0", value))
    }
}
