use crate::core::{CompileMode, SkipReason, WriteAction};
use crate::issues::Issue;

#[derive(Debug)]
pub enum CommandSummary {
    Compile(CompileSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct CompileSummary {
    pub mode: CompileMode,
    pub source_lang: String,
    /// Source catalog path as displayed to the user.
    pub source_file: String,
    pub source_key_count: usize,
    pub targets: Vec<TargetSummary>,
    pub skipped: Vec<SkippedInput>,
    /// Input patterns that matched no file.
    pub unmatched: Vec<String>,
}

impl CompileSummary {
    pub fn written_count(&self) -> usize {
        self.targets
            .iter()
            .filter(|t| matches!(t.status, TargetStatus::Written { .. }))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.targets
            .iter()
            .filter(|t| matches!(t.status, TargetStatus::Failed))
            .count()
    }
}

/// Outcome of one target, with the issues it raised.
#[derive(Debug)]
pub struct TargetSummary {
    pub language: String,
    pub catalog_path: String,
    pub output_path: String,
    pub status: TargetStatus,
    pub issues: Vec<Issue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetStatus {
    Written {
        action: WriteAction,
        translated: usize,
        untranslated: usize,
    },
    Failed,
}

#[derive(Debug)]
pub struct SkippedInput {
    pub path: String,
    pub reason: SkipReason,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running msgc commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Failed targets. Any error makes the run exit with code 1.
    pub error_count: usize,
    pub warning_count: usize,
}
