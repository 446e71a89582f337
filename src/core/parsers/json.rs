use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::core::Catalog;

/// Bookkeeping entry written by translatewiki; never a message.
pub const METADATA_KEY: &str = "@metadata";

/// Read a flat JSON object of string values, preserving file order.
///
/// The `@metadata` entry is dropped. Any other non-string value is an error.
pub fn parse_ordered_pairs(path: &Path) -> Result<Vec<(String, String)>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {}", path.display()))?;
    parse_ordered_pairs_str(&content)
        .with_context(|| format!("Failed to parse JSON file: {}", path.display()))
}

fn parse_ordered_pairs_str(content: &str) -> Result<Vec<(String, String)>> {
    let json: Value = serde_json::from_str(content)?;
    let Value::Object(map) = json else {
        bail!("Root of JSON file must be an object");
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        if key == METADATA_KEY {
            continue;
        }
        match value {
            Value::String(s) => pairs.push((key, s)),
            other => bail!(
                "Value of \"{}\" must be a string, found {}",
                key,
                json_type_name(&other)
            ),
        }
    }
    Ok(pairs)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Load a message catalog from a JSON file.
pub fn parse_catalog_file(path: &Path) -> Result<Catalog> {
    let pairs = parse_ordered_pairs(path)?;
    Ok(Catalog::from_pairs(path.to_string_lossy(), pairs))
}

/// Extracts the language code from a catalog filename.
///
/// Everything before the first `.` is the language.
///
/// Examples:
/// - "en.json" -> Some("en")
/// - "zh-hans.json" -> Some("zh-hans")
/// - "/path/to/json/pt-br.json" -> Some("pt-br")
pub fn extract_language(path: impl AsRef<Path>) -> Option<String> {
    let name = path.as_ref().file_name()?.to_str()?;
    let language = match name.find('.') {
        Some(idx) => &name[..idx],
        None => name,
    };
    if language.is_empty() {
        None
    } else {
        Some(language.to_string())
    }
}

/// List every `.json` file directly inside `messages_root`, sorted by path.
pub fn scan_catalog_files(messages_root: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let messages_root = messages_root.as_ref();

    if !messages_root.exists() {
        bail!(
            "Messages directory '{}' does not exist.\n\
             Hint: Check your .msgcrc.json 'messagesRoot' setting.",
            messages_root.display()
        );
    }

    if !messages_root.is_dir() {
        bail!("'{}' is not a directory.", messages_root.display());
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(messages_root)? {
        let path = entry?.path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
