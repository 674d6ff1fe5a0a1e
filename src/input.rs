//! JSON documents of optionally keyed entries
//!
//! JSON object keys can never be null, so a document may also be written as an
//! array of `[key, value]` pairs where the key slot is a string or `null`:
//!
//! ```json
//! [[null, 1], ["", 2], ["key", 3]]
//! ```
//!
//! Plain objects (`{"": 2, "key": 3}`) are accepted as well.

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading a document
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Input file not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for document loading
pub type Result<T> = std::result::Result<T, InputError>;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDocument {
    Pairs(Vec<(Option<String>, Value)>),
    Object(serde_json::Map<String, Value>),
}

/// A mapping from optional string keys to JSON values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    entries: HashMap<Option<String>, Value>,
}

impl Document {
    /// Parse a document from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawDocument = serde_json::from_str(json)?;
        Ok(Self::from_raw(raw))
    }

    /// Read and parse a document from any reader
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut contents = String::new();
        reader.read_to_string(&mut contents)?;
        Self::from_json(&contents)
    }

    /// Load a document from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(InputError::NotFound(path_ref.display().to_string()));
        }

        let contents = fs::read_to_string(path_ref)?;
        tracing::debug!(path = %path_ref.display(), bytes = contents.len(), "read input");
        Self::from_json(&contents)
    }

    fn from_raw(raw: RawDocument) -> Self {
        let mut entries = HashMap::new();
        match raw {
            RawDocument::Pairs(pairs) => {
                for (key, value) in pairs {
                    if let Some(previous) = entries.insert(key, value) {
                        tracing::debug!(replaced = %previous, "duplicate key, keeping last value");
                    }
                }
            }
            RawDocument::Object(object) => {
                entries.extend(object.into_iter().map(|(k, v)| (Some(k), v)));
            }
        }
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Borrow the underlying mapping
    pub fn entries(&self) -> &HashMap<Option<String>, Value> {
        &self.entries
    }

    /// Take the underlying mapping
    pub fn into_entries(self) -> HashMap<Option<String>, Value> {
        self.entries
    }
}
