use super::{CommandResult, CommandSummary};
use crate::issues::{Report, Severity};

pub fn finish(summary: CommandSummary) -> CommandResult {
    let severities: Vec<Severity> = match &summary {
        CommandSummary::Compile(compile) => compile
            .targets
            .iter()
            .flat_map(|t| t.issues.iter().map(|i| i.severity()))
            .collect(),
        CommandSummary::Init(_) => Vec::new(),
    };

    let error_count = severities
        .iter()
        .filter(|s| **s == Severity::Error)
        .count();
    let warning_count = severities.len() - error_count;

    CommandResult {
        summary,
        error_count,
        warning_count,
    }
}
