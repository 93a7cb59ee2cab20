//! Unified error type for transformer operations
//!
//! Every failure is detected before the target is touched, so an `Err`
//! from `apply` always means the target was left unchanged.

use thiserror::Error;

/// Error returned by transformers and the registry
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TransformError {
    /// No transformer registered under this kind
    #[error("Unknown transformer kind: {0}")]
    UnknownKind(String),

    /// Edited token is not one of the transformer's options
    #[error("Unknown token '{token}' for {kind} transformer")]
    UnknownToken { kind: &'static str, token: String },

    /// Raw value read from the target has the wrong shape
    #[error("Raw value mismatch for {kind} transformer: expected {expected}")]
    RawMismatch {
        kind: &'static str,
        expected: &'static str,
    },

    /// Edited value has the wrong shape
    #[error("Edited value mismatch for {kind} transformer: expected {expected}")]
    EditMismatch {
        kind: &'static str,
        expected: &'static str,
    },

    /// Edited number is NaN or infinite
    #[error("Non-finite value for {kind} transformer")]
    NonFinite { kind: &'static str },

    /// Target refused a write at this path
    #[error("Property is read-only: {0}")]
    ReadOnly(String),
}

impl TransformError {
    /// Create an unknown kind error
    pub fn unknown_kind(kind: impl Into<String>) -> Self {
        Self::UnknownKind(kind.into())
    }

    /// Create an unknown token error
    pub fn unknown_token(kind: &'static str, token: impl Into<String>) -> Self {
        Self::UnknownToken {
            kind,
            token: token.into(),
        }
    }

    /// Create a raw value mismatch error
    pub fn raw_mismatch(kind: &'static str, expected: &'static str) -> Self {
        Self::RawMismatch { kind, expected }
    }

    /// Create an edited value mismatch error
    pub fn edit_mismatch(kind: &'static str, expected: &'static str) -> Self {
        Self::EditMismatch { kind, expected }
    }

    /// Create a read-only error
    pub fn read_only(path: impl Into<String>) -> Self {
        Self::ReadOnly(path.into())
    }
}
