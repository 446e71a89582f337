//! Command-line interface layer.
//!
//! Parses arguments, runs the requested command and prints its report.

use anyhow::Result;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

use exit_code::exit_status_from_result;
use report::ReportOptions;

pub mod args;
pub mod commands;
mod exit_code;
mod exit_status;
pub mod report;
mod run;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let options = ReportOptions {
        quiet: args.quiet(),
        verbose: args.verbose(),
    };

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let result = run::run(args)?;
    report::print(&result, options);

    Ok(exit_status_from_result(&result))
}
