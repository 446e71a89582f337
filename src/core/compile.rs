//! Per-run compilation: load the shared inputs once, then compile each target
//! independently.
//!
//! A target failure (unreadable catalog, unwritable output) never affects the
//! other targets. Only the shared inputs are fatal.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use anyhow::Result;

use super::{
    Catalog, MergeResult, OutputFormat, SynonymMap,
    emit::{append_supplement, write_message_file},
    merge,
    parsers::json::{extract_language, parse_catalog_file},
    validate::validate_source,
};

/// How target files are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompileMode {
    /// Create or overwrite `<lang>.<ext>` with header, definitions and aliases.
    #[default]
    Standard,
    /// Append a section built from `<lang>_<suffix>.json` to `<lang>.<ext>`.
    Supplement,
}

/// Run-wide settings. Built once, read-only afterwards.
#[derive(Debug, Clone)]
pub struct CompileOptions {
    pub source_lang: String,
    pub source_file: PathBuf,
    pub synonym_file: PathBuf,
    pub output_dir: PathBuf,
    pub format: OutputFormat,
    pub mode: CompileMode,
    pub supplement_suffix: String,
    /// File stems that are never targets (`qqq`, `keys`, `synonyms`).
    pub ignored_languages: Vec<String>,
}

/// Why an input file produced no output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The file name has no usable language code.
    NoLanguage,
    /// Reserved stem such as `qqq` or `synonyms`.
    Reserved,
    /// A `<lang>_<suffix>.json` file given as a target. It is only read as
    /// the supplement of `<lang>`.
    SupplementSource,
    /// Supplemental run and `<lang>_<suffix>.json` does not exist.
    NoSupplement,
    /// An earlier input already targets the same language.
    DuplicateLanguage,
}

/// One unit of work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetJob {
    pub language: String,
    /// Catalog to merge (the supplemental file in supplemental mode).
    pub catalog_path: PathBuf,
    pub output_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetPlan {
    Compile(TargetJob),
    Skip { input: PathBuf, reason: SkipReason },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteAction {
    Created,
    Appended,
}

/// A target that was written.
#[derive(Debug)]
pub struct TargetReport {
    pub job: TargetJob,
    pub merged: MergeResult,
    pub action: WriteAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureStage {
    Load,
    Write,
}

/// A target that could not be compiled.
#[derive(Debug)]
pub struct TargetFailure {
    pub job: TargetJob,
    pub stage: FailureStage,
    pub error: anyhow::Error,
}

impl CompileOptions {
    /// Decide what to do with one input catalog path.
    pub fn plan_target(&self, input: &Path) -> TargetPlan {
        let skip = |reason| TargetPlan::Skip {
            input: input.to_path_buf(),
            reason,
        };

        let Some(language) = extract_language(input) else {
            return skip(SkipReason::NoLanguage);
        };
        if self.ignored_languages.iter().any(|l| *l == language) {
            return skip(SkipReason::Reserved);
        }

        let suffix = format!("_{}", self.supplement_suffix);
        if language.ends_with(&suffix) {
            return skip(SkipReason::SupplementSource);
        }
        let output_path = self.format.output_path(&self.output_dir, &language);

        match self.mode {
            CompileMode::Standard => TargetPlan::Compile(TargetJob {
                language,
                catalog_path: input.to_path_buf(),
                output_path,
            }),
            CompileMode::Supplement => {
                let catalog_path = input.with_file_name(format!("{}{}.json", language, suffix));
                if !catalog_path.is_file() {
                    return skip(SkipReason::NoSupplement);
                }
                TargetPlan::Compile(TargetJob {
                    language,
                    catalog_path,
                    output_path,
                })
            }
        }
    }

    /// Plan every input in order. Only the first input for a language is
    /// compiled, so no output file is written or appended to twice.
    pub fn plan_targets(&self, inputs: &[PathBuf]) -> Vec<TargetPlan> {
        let mut languages: HashSet<String> = HashSet::new();
        let mut plans = Vec::with_capacity(inputs.len());

        for input in inputs {
            let plan = match self.plan_target(input) {
                TargetPlan::Compile(job) if languages.contains(&job.language) => TargetPlan::Skip {
                    input: input.clone(),
                    reason: SkipReason::DuplicateLanguage,
                },
                TargetPlan::Compile(job) => {
                    languages.insert(job.language.clone());
                    TargetPlan::Compile(job)
                }
                skip => skip,
            };
            plans.push(plan);
        }

        plans
    }
}

/// Shared, validated inputs for one run.
#[derive(Debug)]
pub struct Compiler {
    options: CompileOptions,
    source: Catalog,
    synonyms: SynonymMap,
    alias_block: String,
}

impl Compiler {
    /// Load and validate the source catalog and synonym table.
    ///
    /// Fails when either file cannot be read, or when a source value spans
    /// several lines. Nothing has been written at that point.
    pub fn new(options: CompileOptions) -> Result<Self> {
        let source = parse_catalog_file(&options.source_file)?;
        let synonyms = SynonymMap::load(&options.synonym_file)?;
        Self::from_parts(options, source, synonyms)
    }

    pub fn from_parts(options: CompileOptions, source: Catalog, synonyms: SynonymMap) -> Result<Self> {
        validate_source(&source)?;
        let alias_block = synonyms.alias_block(&options.format.namespace);
        Ok(Self {
            options,
            source,
            synonyms,
            alias_block,
        })
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    pub fn source(&self) -> &Catalog {
        &self.source
    }

    /// Merge a target catalog without touching the filesystem.
    pub fn merge(&self, target: &Catalog) -> MergeResult {
        merge(&self.source, target, &self.synonyms)
    }

    /// Load, merge and write one target.
    pub fn compile(&self, job: TargetJob) -> Result<TargetReport, TargetFailure> {
        let target = match parse_catalog_file(&job.catalog_path) {
            Ok(target) => target,
            Err(error) => {
                return Err(TargetFailure {
                    job,
                    stage: FailureStage::Load,
                    error,
                });
            }
        };

        let merged = self.merge(&target);
        let format = &self.options.format;

        let (written, action) = match self.options.mode {
            CompileMode::Standard => {
                let contents =
                    format.render_message_file(&job.language, &merged, &self.alias_block);
                (
                    write_message_file(&job.output_path, &contents),
                    WriteAction::Created,
                )
            }
            CompileMode::Supplement => {
                let contents = format.render_supplement(&merged);
                (
                    append_supplement(&job.output_path, &contents),
                    WriteAction::Appended,
                )
            }
        };

        match written {
            Ok(()) => Ok(TargetReport {
                job,
                merged,
                action,
            }),
            Err(error) => Err(TargetFailure {
                job,
                stage: FailureStage::Write,
                error,
            }),
        }
    }
}
