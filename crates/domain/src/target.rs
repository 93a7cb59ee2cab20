//! Targets - externally owned objects whose properties transformers edit

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{RawValue, TransformError};

/// Property access on an object owned by the scene graph.
///
/// Paths are opaque keys; how they map onto the object is up to the
/// implementation.
pub trait Target {
    /// Current raw value at `path`, if any
    fn property(&self, path: &str) -> Option<&RawValue>;

    /// Replace (or create) the raw value at `path`
    fn set_property(&mut self, path: &str, value: RawValue) -> Result<(), TransformError>;
}

/// In-memory scene object: a flat map of property paths to raw values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneObject {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    properties: BTreeMap<String, RawValue>,
}

impl SceneObject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: BTreeMap::new(),
        }
    }

    pub fn with_property(mut self, path: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.properties.insert(path.into(), value.into());
        self
    }

    pub fn get(&self, path: &str) -> Option<&RawValue> {
        self.properties.get(path)
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl Target for SceneObject {
    fn property(&self, path: &str) -> Option<&RawValue> {
        self.properties.get(path)
    }

    fn set_property(&mut self, path: &str, value: RawValue) -> Result<(), TransformError> {
        self.properties.insert(path.to_string(), value);
        Ok(())
    }
}
