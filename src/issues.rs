//! Issue types for catalog compilation results.
//!
//! Advisories never stop a run. Errors stop one target; the others still
//! compile. Fatal conditions are not issues: they abort the run before any
//! file is written.

use enum_dispatch::enum_dispatch;

use crate::core::{FailureStage, MergeResult, TargetFailure};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    LoadError,
    WriteError,
    NonAsciiKey,
    LineBreak,
    ExtraKey,
    SynonymKey,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::LoadError => write!(f, "load-error"),
            Rule::WriteError => write!(f, "write-error"),
            Rule::NonAsciiKey => write!(f, "non-ascii-key"),
            Rule::LineBreak => write!(f, "line-break"),
            Rule::ExtraKey => write!(f, "extra-key"),
            Rule::SynonymKey => write!(f, "synonym-key"),
        }
    }
}

// ============================================================
// Issue Types - Target Catalogs
// ============================================================

/// Target catalog keys outside 7-bit ASCII. They are still merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonAsciiKeyIssue {
    pub file_path: String,
    pub keys: Vec<String>,
}

/// A target value contained a line break and was rewritten with spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBreakIssue {
    pub file_path: String,
    pub key: String,
}

/// Target-only keys unknown to the source catalog and the synonym table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraKeysIssue {
    pub file_path: String,
    pub keys: Vec<String>,
}

/// Target-only keys that are synonym aliases. The alias block already
/// defines them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynonymKeysIssue {
    pub file_path: String,
    pub keys: Vec<String>,
}

// ============================================================
// Issue Types - Per-target failures
// ============================================================

/// Target catalog could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadErrorIssue {
    pub file_path: String,
    pub error: String,
}

/// Generated file could not be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteErrorIssue {
    pub file_path: String,
    pub error: String,
}

// ============================================================
// Issue Enum
// ============================================================

/// An issue found while compiling a target catalog.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    NonAsciiKey(NonAsciiKeyIssue),
    LineBreak(LineBreakIssue),
    ExtraKeys(ExtraKeysIssue),
    SynonymKeys(SynonymKeysIssue),
    LoadError(LoadErrorIssue),
    WriteError(WriteErrorIssue),
}

impl Issue {
    /// Advisory issues produced by one merge, in report order.
    pub fn from_merge(file_path: &str, merged: &MergeResult) -> Vec<Issue> {
        let mut issues = Vec::new();

        if !merged.non_ascii_keys.is_empty() {
            issues.push(Issue::NonAsciiKey(NonAsciiKeyIssue {
                file_path: file_path.to_string(),
                keys: merged.non_ascii_keys.clone(),
            }));
        }
        issues.extend(merged.sanitized_keys.iter().map(|key| {
            Issue::LineBreak(LineBreakIssue {
                file_path: file_path.to_string(),
                key: key.clone(),
            })
        }));
        if !merged.extra_keys.is_empty() {
            issues.push(Issue::ExtraKeys(ExtraKeysIssue {
                file_path: file_path.to_string(),
                keys: merged.extra_keys.clone(),
            }));
        }
        if !merged.synonym_keys.is_empty() {
            issues.push(Issue::SynonymKeys(SynonymKeysIssue {
                file_path: file_path.to_string(),
                keys: merged.synonym_keys.clone(),
            }));
        }

        issues
    }

    /// Error issue for a target that failed. Load failures point at the
    /// catalog, write failures at the generated file.
    pub fn from_failure(catalog_path: &str, output_path: &str, failure: &TargetFailure) -> Issue {
        // `{:#}` keeps the whole context chain on one line.
        let error = format!("{:#}", failure.error);
        match failure.stage {
            FailureStage::Load => Issue::LoadError(LoadErrorIssue {
                file_path: catalog_path.to_string(),
                error,
            }),
            FailureStage::Write => Issue::WriteError(WriteErrorIssue {
                file_path: output_path.to_string(),
                error,
            }),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Trait for types that can be reported to CLI.
///
/// Uses `enum_dispatch` for static dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    /// File the issue belongs to.
    fn file_path(&self) -> &str;

    /// Primary message to display.
    fn message(&self) -> String;

    fn severity(&self) -> Severity;

    fn rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }
}

impl Report for NonAsciiKeyIssue {
    fn file_path(&self) -> &str {
        &self.file_path
    }

    fn message(&self) -> String {
        format!("keys contain non ascii characters: {}", self.keys.join(", "))
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn rule(&self) -> Rule {
        Rule::NonAsciiKey
    }
}

impl Report for LineBreakIssue {
    fn file_path(&self) -> &str {
        &self.file_path
    }

    fn message(&self) -> String {
        format!("definition of {} contained a newline character", self.key)
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn rule(&self) -> Rule {
        Rule::LineBreak
    }

    fn hint(&self) -> Option<&str> {
        Some("line breaks were replaced with spaces")
    }
}

impl Report for ExtraKeysIssue {
    fn file_path(&self) -> &str {
        &self.file_path
    }

    fn message(&self) -> String {
        format!("extra keys appeared: {}", self.keys.join(", "))
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn rule(&self) -> Rule {
        Rule::ExtraKey
    }
}

impl Report for SynonymKeysIssue {
    fn file_path(&self) -> &str {
        &self.file_path
    }

    fn message(&self) -> String {
        format!("synonym keys appeared: {}", self.keys.join(", "))
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn rule(&self) -> Rule {
        Rule::SynonymKey
    }

    fn hint(&self) -> Option<&str> {
        Some("synonyms resolve to their canonical key and need no translation")
    }
}

impl Report for LoadErrorIssue {
    fn file_path(&self) -> &str {
        &self.file_path
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn rule(&self) -> Rule {
        Rule::LoadError
    }
}

impl Report for WriteErrorIssue {
    fn file_path(&self) -> &str {
        &self.file_path
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn rule(&self) -> Rule {
        Rule::WriteError
    }
}
