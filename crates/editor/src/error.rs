//! Error type for editor operations

use sceneprops_domain::TransformError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EditorError {
    /// The target has no value at the bound path
    #[error("Missing property: {0}")]
    MissingProperty(String),

    /// Transformer failed for the property at `path`
    #[error("Property '{path}': {source}")]
    Transform {
        path: String,
        #[source]
        source: TransformError,
    },
}

impl EditorError {
    pub fn missing_property(path: impl Into<String>) -> Self {
        Self::MissingProperty(path.into())
    }

    pub fn transform(path: impl Into<String>, source: TransformError) -> Self {
        Self::Transform {
            path: path.into(),
            source,
        }
    }
}
