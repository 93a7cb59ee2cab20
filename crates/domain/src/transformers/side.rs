//! Side transformer: material side constant shown as a front/back/double switch

use tracing::warn;

use super::traits::{Transformer, UnknownTokenPolicy};
use crate::{EditValue, LiteralStyle, PropDescriptor, RawValue, Side, Target, TransformError};

const KIND: &str = "side";

/// Material side edited through a three-way switch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SideTransformer {
    policy: UnknownTokenPolicy,
}

impl SideTransformer {
    /// Strict transformer: unknown tokens are rejected.
    pub fn new() -> Self {
        Self::with_policy(UnknownTokenPolicy::Reject)
    }

    pub fn with_policy(policy: UnknownTokenPolicy) -> Self {
        Self { policy }
    }

    fn resolve(&self, token: &str) -> Result<Side, TransformError> {
        match (Side::from_token(token), self.policy) {
            (Some(side), _) => Ok(side),
            (None, UnknownTokenPolicy::Reject) => Err(TransformError::unknown_token(KIND, token)),
            (None, UnknownTokenPolicy::Fallback) => {
                let side = Side::Double;
                warn!(token = %token, fallback = %side, "Unknown side token, using fallback");
                Ok(side)
            }
        }
    }
}

impl Transformer for SideTransformer {
    fn kind(&self) -> &'static str {
        KIND
    }

    fn transform(&self, raw: &RawValue) -> Result<PropDescriptor, TransformError> {
        let constant = raw
            .as_constant()
            .ok_or_else(|| TransformError::raw_mismatch(KIND, "constant"))?;
        let side = Side::from_constant(constant);
        Ok(PropDescriptor::string_literal(
            side.token(),
            Side::all().iter().map(|s| (s.token(), s.label())),
            LiteralStyle::Switch,
        ))
    }

    fn apply(
        &self,
        target: &mut dyn Target,
        path: &str,
        value: &EditValue,
    ) -> Result<(), TransformError> {
        let EditValue::StringLiteral(token) = value else {
            return Err(TransformError::edit_mismatch(KIND, "string literal"));
        };
        let side = self.resolve(token)?;
        target.set_property(path, RawValue::from(side))
    }
}
