use std::collections::HashMap;

/// A key to message mapping for one language.
///
/// Iteration order of the underlying map is irrelevant: anything that is
/// emitted goes through [`Catalog::sorted_keys`] first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    /// File the catalog was read from (used in reports).
    pub file_path: String,
    pub entries: HashMap<String, String>,
}

impl Catalog {
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            entries: HashMap::new(),
        }
    }

    /// Build a catalog from `(key, value)` pairs.
    pub fn from_pairs<K, V>(file_path: impl Into<String>, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut catalog = Self::new(file_path);
        catalog.entries.extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
        catalog
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in ascending byte order. This is the emission order of every
    /// generated file.
    pub fn sorted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}
