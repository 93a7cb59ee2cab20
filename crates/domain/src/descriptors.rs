//! Editable value descriptors for the animation editor
//!
//! A transformer turns a raw value into a [`PropDescriptor`], which tells the
//! editor what widget to render and what the current value is. After the user
//! edits it, the editor hands back an [`EditValue`] of the matching shape.
//!
//! # Design Philosophy
//!
//! - **Editor-agnostic**: descriptors carry values and display hints only
//! - **Fresh per call**: nothing is cached or shared between calls
//! - **Closed option sets**: enumerations list every accepted token with a label

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// =============================================================================
// Descriptors
// =============================================================================

/// Description of a UI-editable value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum PropDescriptor {
    /// Single number
    #[serde(rename_all = "camelCase")]
    Number {
        value: f64,
        /// Inclusive `[min, max]` range for slider widgets
        #[serde(default, skip_serializing_if = "Option::is_none")]
        range: Option<[f64; 2]>,
        /// Scrub sensitivity hint
        #[serde(default, skip_serializing_if = "Option::is_none")]
        nudge_multiplier: Option<f64>,
    },
    /// Group of named numbers edited together (x/y/z)
    Compound { fields: BTreeMap<String, f64> },
    /// One token out of a closed, labelled set
    StringLiteral {
        value: String,
        options: Vec<LiteralOption>,
        #[serde(rename = "as", default)]
        style: LiteralStyle,
    },
    /// Color with alpha
    Rgba { r: f64, g: f64, b: f64, a: f64 },
}

/// Option for string literal descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiteralOption {
    /// Token written back on edit
    pub value: String,
    /// Display label
    pub label: String,
}

impl LiteralOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// How a string literal should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiteralStyle {
    /// Dropdown menu
    #[default]
    Menu,
    /// Segmented switch
    Switch,
}

impl PropDescriptor {
    /// Plain number without range or nudge hints
    pub fn number(value: f64) -> Self {
        Self::Number {
            value,
            range: None,
            nudge_multiplier: None,
        }
    }

    /// Number constrained to a range
    pub fn ranged_number(value: f64, min: f64, max: f64) -> Self {
        Self::Number {
            value,
            range: Some([min, max]),
            nudge_multiplier: None,
        }
    }

    /// Compound from `(key, value)` pairs
    pub fn compound<'a>(fields: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        Self::Compound {
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        }
    }

    /// String literal from `(token, label)` pairs
    pub fn string_literal<'a>(
        value: impl Into<String>,
        options: impl IntoIterator<Item = (&'a str, &'a str)>,
        style: LiteralStyle,
    ) -> Self {
        Self::StringLiteral {
            value: value.into(),
            options: options
                .into_iter()
                .map(|(v, l)| LiteralOption::new(v, l))
                .collect(),
            style,
        }
    }

    /// Short kind name ("number", "compound", "stringLiteral", "rgba")
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Number { .. } => "number",
            Self::Compound { .. } => "compound",
            Self::StringLiteral { .. } => "stringLiteral",
            Self::Rgba { .. } => "rgba",
        }
    }

    /// The edited value that leaves this descriptor unchanged
    pub fn current_value(&self) -> EditValue {
        match self {
            Self::Number { value, .. } => EditValue::Number(*value),
            Self::Compound { fields } => EditValue::Compound(fields.clone()),
            Self::StringLiteral { value, .. } => EditValue::StringLiteral(value.clone()),
            Self::Rgba { r, g, b, a } => EditValue::Rgba {
                r: *r,
                g: *g,
                b: *b,
                a: *a,
            },
        }
    }
}

// =============================================================================
// Edited values
// =============================================================================

/// Value coming back from the editor after a user edit.
///
/// Deserializes untagged: a JSON number, an object of numbers, a string, or
/// an `{r, g, b, a}` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EditValue {
    Number(f64),
    Rgba { r: f64, g: f64, b: f64, a: f64 },
    /// Partial maps are allowed; missing keys are left untouched on apply
    Compound(BTreeMap<String, f64>),
    StringLiteral(String),
}

impl EditValue {
    /// Compound from `(key, value)` pairs
    pub fn compound<'a>(fields: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        Self::Compound(
            fields
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }

    pub fn literal(token: impl Into<String>) -> Self {
        Self::StringLiteral(token.into())
    }
}

impl From<f64> for EditValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}
