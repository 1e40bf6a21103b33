//! Documentation dataset model.
//!
//! The dataset is a flat list of entries keyed by command name. Keys can be
//! multi-token (`"fix_modify AtC output"`); the resolver decides which keys
//! to probe for a given snippet.

use crate::error::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// A single documentation entry.
///
/// Only `command` is mandatory; it doubles as the index key. The remaining
/// fields mirror the sections of a manual page and are rendered selectively
/// by the hover builder.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DocEntry {
    pub command: String,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub html_filename: Option<String>,
    #[serde(default)]
    pub syntax: Option<String>,
    #[serde(default)]
    pub parameters: Option<String>,
    #[serde(default)]
    pub examples: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub restrictions: Option<String>,
}

impl DocEntry {
    /// Creates an entry with only the command key set.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            short_description: None,
            html_filename: None,
            syntax: None,
            parameters: None,
            examples: None,
            description: None,
            restrictions: None,
        }
    }
}

/// Exact-match keyed accessor over a documentation dataset.
///
/// The resolver is generic over this trait so tests can substitute a spy
/// that records which keys were probed.
pub trait DocLookup {
    fn lookup(&self, key: &str) -> Option<&DocEntry>;
}

/// In-memory documentation index.
#[derive(Debug, Default)]
pub struct DocIndex {
    entries: HashMap<String, DocEntry>,
}

impl DocIndex {
    /// Builds an index from a JSON array of entries.
    ///
    /// Later entries win on duplicate command keys; duplicates are logged
    /// since they indicate a broken dataset.
    pub fn from_json(json: &str) -> Result<Self> {
        let list: Vec<DocEntry> = serde_json::from_str(json)?;
        let mut entries = HashMap::with_capacity(list.len());
        for entry in list {
            if let Some(previous) = entries.insert(entry.command.clone(), entry) {
                tracing::warn!("duplicate documentation entry: {:?}", previous.command);
            }
        }
        Ok(Self { entries })
    }

    /// Builds an index from a JSON file on disk.
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Inserts a single entry, replacing any existing entry with the same key.
    pub fn insert(&mut self, entry: DocEntry) {
        self.entries.insert(entry.command.clone(), entry);
    }

    /// Iterates over all entries in unspecified order.
    pub fn entries(&self) -> impl Iterator<Item = &DocEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DocLookup for DocIndex {
    fn lookup(&self, key: &str) -> Option<&DocEntry> {
        self.entries.get(key)
    }
}
