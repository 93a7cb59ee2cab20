//! Transformer contract shared by every editable property kind.
//!
//! A transformer converts a raw value read from a target into a descriptor
//! the editor can render, and writes an edited value back onto the target.

use serde::{Deserialize, Serialize};

use crate::{EditValue, PropDescriptor, RawValue, Target, TransformError};

/// Bidirectional raw ↔ editable conversion for one property kind.
///
/// Implementations are stateless apart from construction-time options.
pub trait Transformer: Send + Sync {
    /// Registration key (e.g., "degrees", "euler", "side").
    fn kind(&self) -> &'static str;

    /// Describe a raw value for the editor.
    ///
    /// Pure: never touches the target the value came from.
    fn transform(&self, raw: &RawValue) -> Result<PropDescriptor, TransformError>;

    /// Write an edited value onto `target` at `path`.
    ///
    /// The edited value is validated before anything is written, so on
    /// error the target is unchanged.
    fn apply(
        &self,
        target: &mut dyn Target,
        path: &str,
        value: &EditValue,
    ) -> Result<(), TransformError>;
}

/// What enumerated transformers do with a token outside their option set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownTokenPolicy {
    /// Return [`TransformError::UnknownToken`]
    #[default]
    Reject,
    /// Write the last option (kept for data saved by older editors)
    Fallback,
}

impl std::str::FromStr for UnknownTokenPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reject" => Ok(UnknownTokenPolicy::Reject),
            "fallback" => Ok(UnknownTokenPolicy::Fallback),
            _ => Err(format!("Unknown token policy: {}", s)),
        }
    }
}

/// Reject NaN and infinities before they reach the target.
pub(crate) fn ensure_finite(kind: &'static str, value: f64) -> Result<f64, TransformError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(TransformError::NonFinite { kind })
    }
}
