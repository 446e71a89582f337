use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".msgcrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_source_lang")]
    pub source_lang: String,
    #[serde(default = "default_source_lang_file")]
    pub source_lang_file: String,
    #[serde(default = "default_source_synonym_file")]
    pub source_synonym_file: String,
    /// Directory scanned for target catalogs when no input is given.
    #[serde(default = "default_messages_root")]
    pub messages_root: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_output_extension")]
    pub output_extension: String,
    #[serde(default = "default_namespace")]
    pub namespace: String,
    #[serde(default = "default_supplement_suffix")]
    pub supplement_suffix: String,
    #[serde(default = "default_supplement_label")]
    pub supplement_label: String,
    #[serde(default = "default_ignored_languages")]
    pub ignored_languages: Vec<String>,
}

fn default_source_lang() -> String {
    "en".to_string()
}

fn default_source_lang_file() -> String {
    "json/en.json".to_string()
}

fn default_source_synonym_file() -> String {
    "json/synonyms.json".to_string()
}

fn default_messages_root() -> String {
    "json".to_string()
}

fn default_output_dir() -> String {
    "js".to_string()
}

fn default_output_extension() -> String {
    "js".to_string()
}

fn default_namespace() -> String {
    "Blockly.Msg".to_string()
}

fn default_supplement_suffix() -> String {
    "ardublockly".to_string()
}

fn default_supplement_label() -> String {
    "Ardublockly".to_string()
}

fn default_ignored_languages() -> Vec<String> {
    ["qqq", "keys", "synonyms"].map(String::from).to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_lang: default_source_lang(),
            source_lang_file: default_source_lang_file(),
            source_synonym_file: default_source_synonym_file(),
            messages_root: default_messages_root(),
            output_dir: default_output_dir(),
            output_extension: default_output_extension(),
            namespace: default_namespace(),
            supplement_suffix: default_supplement_suffix(),
            supplement_label: default_supplement_label(),
            ignored_languages: default_ignored_languages(),
        }
    }
}

/// A dotted identifier path such as `Blockly.Msg`.
fn is_namespace(namespace: &str) -> bool {
    !namespace.is_empty()
        && namespace.split('.').all(|segment| {
            let mut chars = segment.chars();
            chars
                .next()
                .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        })
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !is_namespace(&self.namespace) {
            bail!(
                "Invalid 'namespace': \"{}\" (expected a dotted identifier such as Blockly.Msg)",
                self.namespace
            );
        }
        if self.output_extension.is_empty() || self.output_extension.contains(['.', '/', '\\']) {
            bail!("Invalid 'outputExtension': \"{}\"", self.output_extension);
        }
        if self.supplement_suffix.is_empty() {
            bail!("'supplementSuffix' must not be empty");
        }
        if self.source_lang.is_empty() {
            bail!("'sourceLang' must not be empty");
        }
        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory relative paths in the config resolve against.
    pub base_dir: PathBuf,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                base_dir,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            base_dir: start_dir.to_path_buf(),
        }),
    }
}
