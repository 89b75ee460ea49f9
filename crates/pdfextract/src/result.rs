//! The extraction record written to stdout.

use serde::ser::{Serialize, SerializeMap, SerializeStruct, Serializer};

use crate::error::ExtractError;

/// Key holding the page count in [`Metadata`].
pub const PAGES_KEY: &str = "pages";

/// A metadata value: document properties are strings, the page count is an
/// integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataValue {
    Text(String),
    Integer(u64),
}

impl Serialize for MetadataValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MetadataValue::Text(s) => serializer.serialize_str(s),
            MetadataValue::Integer(n) => serializer.serialize_u64(*n),
        }
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        MetadataValue::Text(value)
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        MetadataValue::Text(value.to_string())
    }
}

impl From<u64> for MetadataValue {
    fn from(value: u64) -> Self {
        MetadataValue::Integer(value)
    }
}

/// Document metadata with unique keys, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    entries: Vec<(String, MetadataValue)>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` under `key`. An existing key keeps its position and
    /// has its value replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<MetadataValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// The page count, once recorded.
    pub fn pages(&self) -> Option<u64> {
        match self.get(PAGES_KEY) {
            Some(MetadataValue::Integer(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetadataValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<MetadataValue>> FromIterator<(K, V)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut meta = Metadata::new();
        for (k, v) in iter {
            meta.insert(k, v);
        }
        meta
    }
}

impl Serialize for Metadata {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// A successful extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub text: String,
    pub metadata: Metadata,
}

/// A failed extraction: the error message and its full trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub error: String,
    pub traceback: String,
}

impl From<&ExtractError> for Failure {
    fn from(err: &ExtractError) -> Self {
        Self {
            error: err.to_string(),
            traceback: err.traceback(),
        }
    }
}

/// Outcome of one extraction, serialized as
/// `{"success": true, "text": ..., "metadata": {...}}` or
/// `{"success": false, "error": ..., "traceback": ...}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionResult {
    Success(Extraction),
    Failure(Failure),
}

impl ExtractionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ExtractionResult::Success(_))
    }

    pub fn success(&self) -> Option<&Extraction> {
        match self {
            ExtractionResult::Success(extraction) => Some(extraction),
            ExtractionResult::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            ExtractionResult::Success(_) => None,
            ExtractionResult::Failure(failure) => Some(failure),
        }
    }
}

impl From<Result<Extraction, ExtractError>> for ExtractionResult {
    fn from(result: Result<Extraction, ExtractError>) -> Self {
        match result {
            Ok(extraction) => ExtractionResult::Success(extraction),
            Err(err) => ExtractionResult::Failure(Failure::from(&err)),
        }
    }
}

impl Serialize for ExtractionResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ExtractionResult", 3)?;
        match self {
            ExtractionResult::Success(extraction) => {
                state.serialize_field("success", &true)?;
                state.serialize_field("text", &extraction.text)?;
                state.serialize_field("metadata", &extraction.metadata)?;
            }
            ExtractionResult::Failure(failure) => {
                state.serialize_field("success", &false)?;
                state.serialize_field("error", &failure.error)?;
                state.serialize_field("traceback", &failure.traceback)?;
            }
        }
        state.end()
    }
}
