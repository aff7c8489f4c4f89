//! Multitouch Replay (mtreplay) - CLI entry point

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands, ConfigCommands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let interactive = matches!(cli.command, Commands::Play(_));
    mtreplay::logging::init(cli.log_file.as_deref(), cli.verbose, interactive)?;

    match cli.command {
        Commands::Play(args) => commands::play::handle(&args),
        Commands::Frames { file, limit } => commands::frames::handle(&file, limit),
        Commands::Info { file, json } => commands::info::handle(&file, json),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
