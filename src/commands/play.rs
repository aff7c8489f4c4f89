//! Play command handler

use anyhow::{bail, Result};

use mtreplay::player::{play_session, PlayOptions};
use mtreplay::Config;

use crate::cli::PlayArgs;

/// Replay a log with the native player.
///
/// Loads the config, applies command-line overrides and runs the
/// full-screen player until the log ends or the user quits.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: &PlayArgs) -> Result<()> {
    let config = Config::load()?.with_resolution(args.x_res, args.y_res)?;

    if !args.file.exists() {
        bail!("File not found: {}", args.file.display());
    }

    let options = PlayOptions {
        speed: args.speed,
        start: args.start,
    };
    let result = play_session(&args.file, &config, &options)?;
    println!("{}", result.message());
    Ok(())
}
