//! Property editor - binds target paths to transformer kinds
//!
//! The editor reads raw values off a target, asks the registry for a
//! descriptor, and writes user edits back through the same transformer.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use sceneprops_domain::{EditValue, PropDescriptor, Target, TransformerRegistry};

use crate::config::EditorConfig;
use crate::error::EditorError;

/// A property path on the target and the transformer kind that edits it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyBinding {
    pub path: String,
    pub kind: String,
}

impl PropertyBinding {
    pub fn new(path: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: kind.into(),
        }
    }
}

/// One edit coming back from the editor UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyEdit {
    pub path: String,
    pub kind: String,
    pub value: EditValue,
}

impl PropertyEdit {
    pub fn new(binding: &PropertyBinding, value: impl Into<EditValue>) -> Self {
        Self {
            path: binding.path.clone(),
            kind: binding.kind.clone(),
            value: value.into(),
        }
    }
}

/// Descriptor produced for a bound property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribedProperty {
    pub path: String,
    pub kind: String,
    pub descriptor: PropDescriptor,
}

pub struct PropertyEditor {
    registry: TransformerRegistry,
}

impl PropertyEditor {
    pub fn new(registry: TransformerRegistry) -> Self {
        Self { registry }
    }

    /// Editor with the built-in transformers configured from `config`
    pub fn from_config(config: &EditorConfig) -> Self {
        Self::new(TransformerRegistry::with_policy(config.unknown_token_policy))
    }

    pub fn registry(&self) -> &TransformerRegistry {
        &self.registry
    }

    /// Describe the bound property's current value.
    #[instrument(skip(self, target), fields(path = %binding.path, kind = %binding.kind))]
    pub fn describe(
        &self,
        target: &dyn Target,
        binding: &PropertyBinding,
    ) -> Result<PropDescriptor, EditorError> {
        let raw = target
            .property(&binding.path)
            .ok_or_else(|| EditorError::missing_property(&binding.path))?;
        debug!(shape = raw.shape(), "Describing property");
        self.registry
            .transform(&binding.kind, raw)
            .map_err(|e| EditorError::transform(&binding.path, e))
    }

    /// Describe every binding, in order.
    pub fn describe_all(
        &self,
        target: &dyn Target,
        bindings: &[PropertyBinding],
    ) -> Result<Vec<DescribedProperty>, EditorError> {
        bindings
            .iter()
            .map(|binding| -> Result<DescribedProperty, EditorError> {
                Ok(DescribedProperty {
                    path: binding.path.clone(),
                    kind: binding.kind.clone(),
                    descriptor: self.describe(target, binding)?,
                })
            })
            .collect()
    }

    /// Apply one edit to the target.
    #[instrument(skip(self, target), fields(path = %edit.path, kind = %edit.kind))]
    pub fn apply_edit(&self, target: &mut dyn Target, edit: &PropertyEdit) -> Result<(), EditorError> {
        self.registry
            .apply(&edit.kind, target, &edit.path, &edit.value)
            .map_err(|e| EditorError::transform(&edit.path, e))?;
        debug!("Applied edit");
        Ok(())
    }

    /// Apply edits in order, stopping at the first failure.
    ///
    /// Edits before the failing one stay applied.
    pub fn apply_edits(
        &self,
        target: &mut dyn Target,
        edits: &[PropertyEdit],
    ) -> Result<usize, EditorError> {
        for edit in edits {
            self.apply_edit(target, edit)?;
        }
        info!(count = edits.len(), "Applied edits");
        Ok(edits.len())
    }
}

impl Default for PropertyEditor {
    fn default() -> Self {
        Self::from_config(&EditorConfig::default())
    }
}
