//! Property transformers for the animation editor.
//!
//! Each transformer implements the [`Transformer`] contract for one property
//! kind. The [`TransformerRegistry`] maps kind names to transformers.
//!
//! # Built-in Kinds
//!
//! - `degrees` - single angle, radians ↔ degrees
//! - `euler` - x/y/z rotation, radians ↔ degrees
//! - `side` - material side constant ↔ front/back/double switch
//! - `number` - plain scalar
//! - `normalized` - scalar clamped to `[0, 1]`
//! - `vector3` - position or scale
//! - `color` - RGB ↔ RGBA

mod color;
mod degrees;
mod euler;
mod scalar;
mod side;
mod traits;
mod vector;

pub use color::ColorTransformer;
pub use degrees::DegreesTransformer;
pub use euler::EulerTransformer;
pub use scalar::{NormalizedTransformer, NumberTransformer};
pub use side::SideTransformer;
pub use traits::{Transformer, UnknownTokenPolicy};
pub use vector::Vector3Transformer;

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::{EditValue, PropDescriptor, RawValue, Target, TransformError};

/// Registry of available transformers, keyed by kind.
pub struct TransformerRegistry {
    transformers: HashMap<&'static str, Arc<dyn Transformer>>,
}

impl Default for TransformerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformerRegistry {
    /// Create a registry with all built-in transformers and strict tokens.
    pub fn new() -> Self {
        Self::with_policy(UnknownTokenPolicy::Reject)
    }

    /// Create a registry with all built-in transformers, using `policy` for
    /// enumerated kinds.
    pub fn with_policy(policy: UnknownTokenPolicy) -> Self {
        let mut registry = Self::empty();
        // Register built-in transformers
        registry.register(Arc::new(DegreesTransformer::new()));
        registry.register(Arc::new(EulerTransformer::new()));
        registry.register(Arc::new(SideTransformer::with_policy(policy)));
        registry.register(Arc::new(NumberTransformer::new()));
        registry.register(Arc::new(NormalizedTransformer::new()));
        registry.register(Arc::new(Vector3Transformer::new()));
        registry.register(Arc::new(ColorTransformer::new()));
        registry
    }

    /// Create an empty registry without built-in transformers.
    pub fn empty() -> Self {
        Self {
            transformers: HashMap::new(),
        }
    }

    /// Register a transformer, replacing any previous one of the same kind.
    pub fn register(&mut self, transformer: Arc<dyn Transformer>) {
        let kind = transformer.kind();
        if self.transformers.insert(kind, transformer).is_some() {
            debug!(kind = %kind, "Replaced registered transformer");
        }
    }

    /// Get a transformer by its kind.
    pub fn get(&self, kind: &str) -> Option<Arc<dyn Transformer>> {
        self.transformers.get(kind).cloned()
    }

    /// List all registered kinds, sorted.
    pub fn list_kinds(&self) -> Vec<&'static str> {
        let mut kinds: Vec<_> = self.transformers.keys().copied().collect();
        kinds.sort_unstable();
        kinds
    }

    pub fn len(&self) -> usize {
        self.transformers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transformers.is_empty()
    }

    /// Describe `raw` with the transformer registered for `kind`.
    pub fn transform(&self, kind: &str, raw: &RawValue) -> Result<PropDescriptor, TransformError> {
        self.lookup(kind)?.transform(raw)
    }

    /// Apply `value` to `target` at `path` with the transformer registered
    /// for `kind`.
    pub fn apply(
        &self,
        kind: &str,
        target: &mut dyn Target,
        path: &str,
        value: &EditValue,
    ) -> Result<(), TransformError> {
        self.lookup(kind)?.apply(target, path, value)
    }

    fn lookup(&self, kind: &str) -> Result<&dyn Transformer, TransformError> {
        self.transformers
            .get(kind)
            .map(|t| t.as_ref())
            .ok_or_else(|| TransformError::unknown_kind(kind))
    }
}
