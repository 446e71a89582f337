use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::glob;

/// Check if an input contains glob wildcards.
pub fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?') || pattern.contains('[')
}

/// Result of expanding input arguments.
#[derive(Debug, Default)]
pub struct ExpandedInputs {
    /// Unique paths in sorted order.
    pub files: Vec<PathBuf>,
    /// Patterns that matched nothing.
    pub unmatched: Vec<String>,
}

/// Expand input arguments relative to `base_dir`.
///
/// Literal paths are kept as given, whether or not they exist, so that a
/// missing catalog is reported per file. Glob patterns expand to the files
/// they match.
pub fn expand_inputs(base_dir: &Path, inputs: &[String]) -> Result<ExpandedInputs> {
    let mut files: BTreeSet<PathBuf> = BTreeSet::new();
    let mut unmatched = Vec::new();

    for input in inputs {
        let path = base_dir.join(input);
        if !is_glob_pattern(input) {
            files.insert(path);
            continue;
        }

        let pattern = path.to_string_lossy();
        let entries =
            glob(&pattern).with_context(|| format!("Invalid glob pattern: \"{}\"", input))?;
        let mut matched = false;
        for entry in entries.flatten() {
            if entry.is_file() {
                matched = true;
                files.insert(entry);
            }
        }
        if !matched {
            unmatched.push(input.clone());
        }
    }

    Ok(ExpandedInputs {
        files: files.into_iter().collect(),
        unmatched,
    })
}
