use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{fs, path::Path};

/// Date-keyed lookup of nameday celebrants.
///
/// Keys are `"MM-DD"` with both components zero-padded; values are the
/// comma-separated names string straight from the seed. The map keeps
/// first-encounter key order so the serialized artifact is stable across
/// rebuilds of the same seed.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamedayTable {
    entries: Map<String, Value>,
}

/// Build the `"MM-DD"` key for a (month, day) pair.
pub fn date_key(month: u32, day: u32) -> String {
    format!("{:02}-{:02}", month, day)
}

impl NamedayTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `names` under the key for (month, day). A later insert for the
    /// same date replaces the value but keeps the key's original position.
    pub fn insert(&mut self, day: u32, month: u32, names: &str) {
        self.entries
            .insert(date_key(month, day), Value::String(names.to_string()));
    }

    /// Exact-key lookup.
    pub fn get(&self, month: u32, day: u32) -> Option<&str> {
        self.entries.get(&date_key(month, day)).and_then(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find dates celebrating a name: case-insensitive substring match over
    /// the names strings, returned as `(key, names)` in stored order.
    /// Queries shorter than two characters yield nothing, so a single typed
    /// letter does not spill the whole table.
    pub fn search(&self, query: &str) -> Vec<(&str, &str)> {
        if query.chars().count() < 2 {
            return Vec::new();
        }
        let query = query.to_lowercase();
        self.iter()
            .filter(|(_, names)| names.to_lowercase().contains(&query))
            .collect()
    }

    /// Iterate `(key, names)` pairs in stored order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.as_str().map(|s| (k.as_str(), s)))
    }

    /// Serialize pretty-printed to `path`, creating parent directories.
    pub fn write_pretty(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    /// Load a previously written artifact for read-only consumption.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
    }
}
