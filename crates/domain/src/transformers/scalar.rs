//! Plain and normalized number transformers

use super::traits::{ensure_finite, Transformer};
use crate::{EditValue, PropDescriptor, RawValue, Target, TransformError};

/// Any scalar property edited as-is (intensity, distance, ...).
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberTransformer;

impl NumberTransformer {
    const KIND: &'static str = "number";

    pub fn new() -> Self {
        Self
    }
}

impl Transformer for NumberTransformer {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn transform(&self, raw: &RawValue) -> Result<PropDescriptor, TransformError> {
        let value = raw
            .as_scalar()
            .ok_or_else(|| TransformError::raw_mismatch(Self::KIND, "scalar"))?;
        Ok(PropDescriptor::number(value))
    }

    fn apply(
        &self,
        target: &mut dyn Target,
        path: &str,
        value: &EditValue,
    ) -> Result<(), TransformError> {
        let EditValue::Number(value) = value else {
            return Err(TransformError::edit_mismatch(Self::KIND, "number"));
        };
        let value = ensure_finite(Self::KIND, *value)?;
        target.set_property(path, RawValue::Scalar(value))
    }
}

/// Scalar in `[0, 1]` (opacity, roughness, metalness), shown as a slider.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizedTransformer;

impl NormalizedTransformer {
    const KIND: &'static str = "normalized";

    pub fn new() -> Self {
        Self
    }
}

impl Transformer for NormalizedTransformer {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn transform(&self, raw: &RawValue) -> Result<PropDescriptor, TransformError> {
        let value = raw
            .as_scalar()
            .ok_or_else(|| TransformError::raw_mismatch(Self::KIND, "scalar"))?;
        Ok(PropDescriptor::ranged_number(value, 0.0, 1.0))
    }

    fn apply(
        &self,
        target: &mut dyn Target,
        path: &str,
        value: &EditValue,
    ) -> Result<(), TransformError> {
        let EditValue::Number(value) = value else {
            return Err(TransformError::edit_mismatch(Self::KIND, "number"));
        };
        let value = ensure_finite(Self::KIND, *value)?;
        target.set_property(path, RawValue::Scalar(value.clamp(0.0, 1.0)))
    }
}
