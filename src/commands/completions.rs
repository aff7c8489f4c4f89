//! Completions command handler

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell as CompletionShell};
use std::io::{self, Write};

/// Print a completion script for `shell` to stdout.
pub fn handle<C: CommandFactory>(shell: CompletionShell) -> Result<()> {
    write_completions::<C, _>(shell, &mut io::stdout())
}

/// Generate shell completion script into `out`.
pub(crate) fn write_completions<C: CommandFactory, W: Write>(
    shell: CompletionShell,
    out: &mut W,
) -> Result<()> {
    let mut cmd = C::command();
    generate(shell, &mut cmd, "mtreplay", out);
    Ok(())
}
