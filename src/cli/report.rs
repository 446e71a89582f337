//! Report formatting and printing utilities.
//!
//! Warnings and progress go to stdout and are silenced by `--quiet`.
//! Errors always go to stderr. Separate from core logic so that msgc can be
//! used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{
    CommandResult, CommandSummary, CompileSummary, InitSummary, SkippedInput, TargetStatus,
    TargetSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{CompileMode, SkipReason, WriteAction};
use crate::issues::{Issue, Report, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Output switches taken from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    pub quiet: bool,
    pub verbose: bool,
}

pub fn print(result: &CommandResult, options: ReportOptions) {
    print_to(
        result,
        options,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
}

/// Print to custom writers. Useful for testing.
pub fn print_to<O: Write, E: Write>(
    result: &CommandResult,
    options: ReportOptions,
    out: &mut O,
    err: &mut E,
) {
    match &result.summary {
        CommandSummary::Compile(summary) => print_compile(summary, options, out, err),
        CommandSummary::Init(summary) => print_init(summary, out),
    }
}

/// Print one issue in cargo style.
pub fn print_issue<W: Write>(issue: &Issue, writer: &mut W) {
    let severity_str = match issue.severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity_str,
        issue.message(),
        issue.rule().to_string().dimmed().cyan()
    );
    let _ = writeln!(writer, "  {} {}", "-->".blue(), issue.file_path());

    if let Some(hint) = issue.hint() {
        let _ = writeln!(writer, "  {} {} {}", "=".blue(), "hint:".bold().cyan(), hint);
    }

    let _ = writeln!(writer);
}

// ============================================================
// Internal Functions
// ============================================================

fn print_compile<O: Write, E: Write>(
    summary: &CompileSummary,
    options: ReportOptions,
    out: &mut O,
    err: &mut E,
) {
    if options.verbose {
        let _ = writeln!(
            out,
            "Source: {} ({}, {} {})",
            summary.source_file,
            summary.source_lang,
            summary.source_key_count,
            if summary.source_key_count == 1 { "key" } else { "keys" }
        );
        for skipped in &summary.skipped {
            if skipped.reason != SkipReason::DuplicateLanguage {
                print_skipped(skipped, out);
            }
        }
    }

    if !options.quiet {
        for pattern in &summary.unmatched {
            let _ = writeln!(
                out,
                "{} pattern matched no files: {}",
                "warning:".bold().yellow(),
                pattern
            );
        }
        for skipped in &summary.skipped {
            if skipped.reason == SkipReason::DuplicateLanguage {
                let _ = writeln!(
                    out,
                    "{} skipped {}: an earlier file targets the same language",
                    "warning:".bold().yellow(),
                    skipped.path
                );
            }
        }
    }

    for target in &summary.targets {
        print_target(target, summary.mode, options, out, err);
    }

    let failed = summary.failed_count();
    if failed > 0 {
        let _ = writeln!(
            err,
            "{} {}",
            FAILURE_MARK.red(),
            format!(
                "{} of {} message {} failed",
                failed,
                summary.targets.len(),
                if summary.targets.len() == 1 { "file" } else { "files" }
            )
            .red()
        );
    } else if !options.quiet {
        let written = summary.written_count();
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Compiled {} message {}",
                written,
                if written == 1 { "file" } else { "files" }
            )
            .green()
        );
    }
}

fn print_target<O: Write, E: Write>(
    target: &TargetSummary,
    mode: CompileMode,
    options: ReportOptions,
    out: &mut O,
    err: &mut E,
) {
    for issue in &target.issues {
        match issue.severity() {
            Severity::Error => print_issue(issue, err),
            Severity::Warning if !options.quiet => print_issue(issue, out),
            Severity::Warning => {}
        }
    }

    if options.quiet {
        return;
    }

    if let TargetStatus::Written {
        action,
        translated,
        untranslated,
    } = target.status
    {
        if mode == CompileMode::Supplement {
            let _ = writeln!(out, "Processed supplemental translation: {}", target.catalog_path);
        }
        let verb = match action {
            WriteAction::Created => "Created",
            WriteAction::Appended => "Updated",
        };
        let _ = writeln!(
            out,
            "{} {} ({} translated, {} untranslated)",
            verb.green().bold(),
            target.output_path,
            translated,
            untranslated
        );
    }
}

fn print_skipped<W: Write>(skipped: &SkippedInput, writer: &mut W) {
    let reason = match skipped.reason {
        SkipReason::NoLanguage => "no language code",
        SkipReason::Reserved => "reserved name",
        SkipReason::SupplementSource => "supplemental catalog",
        SkipReason::NoSupplement => "no supplemental catalog",
        SkipReason::DuplicateLanguage => "duplicate language",
    };
    let _ = writeln!(
        writer,
        "  {} {} ({})",
        "skipped".dimmed(),
        skipped.path,
        reason
    );
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}
