//! Serialization of merge results into generated message files.
//!
//! A standard file is a header, one definition per source key, then the
//! synonym alias block. A supplemental section is appended to an existing
//! file and carries definitions only.

use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::{EntryStatus, MergeResult, MergedEntry};

/// Marker appended to definitions that fell back to the source value.
pub const UNTRANSLATED_MARKER: &str = "  // untranslated";

/// Naming of the generated files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFormat {
    /// Object path that owns every message, e.g. `Blockly.Msg`.
    pub namespace: String,
    /// Extension of generated files, without the dot.
    pub extension: String,
    /// Label of the supplemental section comment.
    pub supplement_label: String,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self {
            namespace: "Blockly.Msg".to_string(),
            extension: "js".to_string(),
            supplement_label: "Ardublockly".to_string(),
        }
    }
}

impl OutputFormat {
    /// `<output_dir>/<language>.<extension>`
    pub fn output_path(&self, output_dir: &Path, language: &str) -> PathBuf {
        output_dir.join(format!("{}.{}", language, self.extension))
    }

    /// Module boilerplate naming the language module. Hyphens in the language
    /// code become `.` so the module name stays a valid object path.
    pub fn header(&self, language: &str) -> String {
        format!(
            "// This file was automatically generated.  Do not modify.\n\
             \n\
             'use strict';\n\
             \n\
             goog.provide('{ns}.{module}');\n\
             \n\
             goog.require('{ns}');\n\
             \n",
            ns = self.namespace,
            module = language.replace('-', "."),
        )
    }

    pub fn supplement_header(&self) -> String {
        format!("\n\n// {} strings\n", self.supplement_label)
    }

    pub fn definition_line(&self, entry: &MergedEntry) -> String {
        let marker = match entry.status {
            EntryStatus::Translated => "",
            EntryStatus::Untranslated => UNTRANSLATED_MARKER,
        };
        format!(
            "{}.{} = \"{}\";{}\n",
            self.namespace,
            entry.key,
            escape_string_literal(&entry.value),
            marker
        )
    }

    fn definitions(&self, merged: &MergeResult) -> String {
        merged
            .entries
            .iter()
            .map(|entry| self.definition_line(entry))
            .collect()
    }

    /// Full contents of a standard message file.
    pub fn render_message_file(
        &self,
        language: &str,
        merged: &MergeResult,
        alias_block: &str,
    ) -> String {
        let mut out = self.header(language);
        out.push_str(&self.definitions(merged));
        out.push_str(alias_block);
        out
    }

    /// Section appended to an existing file in supplemental mode.
    pub fn render_supplement(&self, merged: &MergeResult) -> String {
        let mut out = self.supplement_header();
        out.push_str(&self.definitions(merged));
        out
    }
}

/// Escape a value for a double-quoted literal.
///
/// Backslashes are doubled before quotes are escaped, so the literal always
/// decodes back to `value`.
pub fn escape_string_literal(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Create or truncate `path` with `contents`. The parent directory must exist.
pub fn write_message_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents)
        .with_context(|| format!("Failed to write file: {}", path.display()))
}

/// Append `contents` to an already generated file. Never creates the file.
pub fn append_supplement(path: &Path, contents: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open generated file for append: {}", path.display()))?;
    file.write_all(contents.as_bytes())
        .with_context(|| format!("Failed to append to file: {}", path.display()))?;
    Ok(())
}
