use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::helper::finish;
use super::{
    CommandResult, CommandSummary, CompileSummary, SkippedInput, TargetStatus, TargetSummary,
};
use crate::{
    cli::args::{CompileArgs, CompileCommand},
    config::{Config, load_config},
    core::{
        CompileMode, CompileOptions, Compiler, OutputFormat, TargetPlan,
        parsers::json::scan_catalog_files, utils::expand_inputs,
    },
    issues::Issue,
};

pub fn compile(cmd: CompileCommand) -> Result<CommandResult> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    compile_in(&cwd, &cmd.args)
}

/// Run a compile with paths resolved against `cwd`.
pub fn compile_in(cwd: &Path, args: &CompileArgs) -> Result<CommandResult> {
    let loaded = load_config(cwd)?;
    let options = build_options(&loaded.config, &loaded.base_dir, cwd, args);
    let messages_root = args
        .messages_root
        .as_ref()
        .map(|p| cwd.join(p))
        .unwrap_or_else(|| loaded.base_dir.join(&loaded.config.messages_root));

    let (inputs, unmatched) = if args.files.is_empty() {
        (scan_catalog_files(&messages_root)?, Vec::new())
    } else {
        let expanded = expand_inputs(cwd, &args.files)?;
        (expanded.files, expanded.unmatched)
    };

    // Shared inputs are checked before any target is touched.
    let compiler = Compiler::new(options)?;
    let options = compiler.options();

    let mut targets = Vec::new();
    let mut skipped = Vec::new();

    for plan in options.plan_targets(&inputs) {
        let job = match plan {
            TargetPlan::Compile(job) => job,
            TargetPlan::Skip { input, reason } => {
                skipped.push(SkippedInput {
                    path: display_path(&input, cwd),
                    reason,
                });
                continue;
            }
        };

        let language = job.language.clone();
        let catalog_path = display_path(&job.catalog_path, cwd);
        let output_path = display_path(&job.output_path, cwd);

        let summary = match compiler.compile(job) {
            Ok(report) => TargetSummary {
                language,
                status: TargetStatus::Written {
                    action: report.action,
                    translated: report.merged.translated_count(),
                    untranslated: report.merged.untranslated_count(),
                },
                issues: Issue::from_merge(&catalog_path, &report.merged),
                catalog_path,
                output_path,
            },
            Err(failure) => TargetSummary {
                language,
                status: TargetStatus::Failed,
                issues: vec![Issue::from_failure(&catalog_path, &output_path, &failure)],
                catalog_path,
                output_path,
            },
        };
        targets.push(summary);
    }

    Ok(finish(CommandSummary::Compile(CompileSummary {
        mode: options.mode,
        source_lang: options.source_lang.clone(),
        source_file: display_path(&options.source_file, cwd),
        source_key_count: compiler.source().len(),
        targets,
        skipped,
        unmatched,
    })))
}

/// Merge config values and command-line overrides. Config paths resolve
/// against the config file's directory, flag paths against `cwd`.
fn build_options(config: &Config, base_dir: &Path, cwd: &Path, args: &CompileArgs) -> CompileOptions {
    let resolve = |flag: &Option<PathBuf>, configured: &str| -> PathBuf {
        flag.as_ref()
            .map(|p| cwd.join(p))
            .unwrap_or_else(|| base_dir.join(configured))
    };

    CompileOptions {
        source_lang: args
            .source_lang
            .clone()
            .unwrap_or_else(|| config.source_lang.clone()),
        source_file: resolve(&args.source_lang_file, &config.source_lang_file),
        synonym_file: resolve(&args.source_synonym_file, &config.source_synonym_file),
        output_dir: resolve(&args.output_dir, &config.output_dir),
        format: OutputFormat {
            namespace: config.namespace.clone(),
            extension: config.output_extension.clone(),
            supplement_label: config.supplement_label.clone(),
        },
        mode: if args.supplement {
            CompileMode::Supplement
        } else {
            CompileMode::Standard
        },
        supplement_suffix: config.supplement_suffix.clone(),
        ignored_languages: config.ignored_languages.clone(),
    }
}

/// Show paths under `cwd` relative to it.
fn display_path(path: &Path, cwd: &Path) -> String {
    path.strip_prefix(cwd)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string()
}
