//! Ambient context passed alongside a raw value.

use enumgate_core::constants::DESERIALIZATION_PATH_KEY;
use serde_json::{Map, Value};

/// Opaque key/value bag supplied by the hosting pipeline.
///
/// The converter only reads the structural path from it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DenormalizationContext {
    entries: Map<String, Value>,
}

impl DenormalizationContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context carrying `path` under the default path key.
    #[must_use]
    pub fn with_path(path: impl Into<String>) -> Self {
        Self::new().with(DESERIALIZATION_PATH_KEY, Value::String(path.into()))
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Structural path under the default path key.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        self.path_at(DESERIALIZATION_PATH_KEY)
    }

    /// Structural path under `key`. Non-string entries are ignored.
    #[must_use]
    pub fn path_at(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_str)
    }
}

impl From<Map<String, Value>> for DenormalizationContext {
    fn from(entries: Map<String, Value>) -> Self {
        Self { entries }
    }
}
