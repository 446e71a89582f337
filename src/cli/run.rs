use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, compile::compile, init::init},
};

/// Dispatch to the command handler.
///
/// # Returns
/// - `Ok(CommandResult)` with per-target outcomes and issue counts
/// - `Err` on fatal conditions (malformed source catalog, unreadable
///   synonym file, invalid config); nothing has been written in that case
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Compile(cmd)) => compile(cmd),
        Some(Command::Init) => init(),
        None => {
            bail!("No command provided. Use --help to see available commands.")
        }
    }
}
