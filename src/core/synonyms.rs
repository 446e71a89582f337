use std::{collections::HashSet, path::Path};

use anyhow::Result;

use super::parsers::json::parse_ordered_pairs;

/// Alias key to canonical key mapping, shared by every target language.
///
/// Pairs keep the order of the synonym file; that order is reproduced in the
/// alias block of every generated file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymMap {
    pairs: Vec<(String, String)>,
    aliases: HashSet<String>,
}

impl SynonymMap {
    pub fn new<A, C>(pairs: impl IntoIterator<Item = (A, C)>) -> Self
    where
        A: Into<String>,
        C: Into<String>,
    {
        let pairs: Vec<(String, String)> = pairs
            .into_iter()
            .map(|(alias, canonical)| (alias.into(), canonical.into()))
            .collect();
        let aliases = pairs.iter().map(|(alias, _)| alias.clone()).collect();
        Self { pairs, aliases }
    }

    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::new(parse_ordered_pairs(path)?))
    }

    pub fn contains_alias(&self, key: &str) -> bool {
        self.aliases.contains(key)
    }

    /// Render the alias assignment statements for `namespace`.
    ///
    /// Canonical targets are not checked against any catalog.
    pub fn alias_block(&self, namespace: &str) -> String {
        self.pairs
            .iter()
            .map(|(alias, canonical)| {
                format!("{ns}.{alias} = {ns}.{canonical};\n", ns = namespace)
            })
            .collect()
    }
}
