//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `compile`: Generate message files from JSON catalogs
//! - `init`: Write a default `.msgcrc.json`

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Compile(cmd)) => cmd.args.verbose,
            Some(Command::Init) | None => false,
        }
    }

    pub fn quiet(&self) -> bool {
        match &self.command {
            Some(Command::Compile(cmd)) => cmd.args.quiet,
            Some(Command::Init) | None => false,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct CompileArgs {
    /// Target catalog files or glob patterns (default: every *.json in the messages root)
    pub files: Vec<String>,

    /// Source language code (overrides config file)
    #[arg(long, env = "MSGC_SOURCE_LANG")]
    pub source_lang: Option<String>,

    /// Source language catalog (overrides config file)
    #[arg(long)]
    pub source_lang_file: Option<PathBuf>,

    /// Synonym definitions file (overrides config file)
    #[arg(long)]
    pub source_synonym_file: Option<PathBuf>,

    /// Directory scanned for target catalogs when no files are given
    #[arg(long)]
    pub messages_root: Option<PathBuf>,

    /// Directory for generated files (overrides config file)
    #[arg(long, env = "MSGC_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Append supplemental strings to already generated files
    #[arg(long)]
    pub supplement: bool,

    /// Do not print warnings or progress
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CompileCommand {
    #[command(flatten)]
    pub args: CompileArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Merge target catalogs with the source catalog into message files
    Compile(CompileCommand),
    /// Initialize a new .msgcrc.json configuration file
    Init,
}
