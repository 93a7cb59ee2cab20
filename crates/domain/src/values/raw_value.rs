//! Raw property values as the scene graph stores them

use serde::{Deserialize, Serialize};

use super::Side;

/// Three-component vector (Euler rotation in radians, position, scale)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Mutable component by name ("x", "y" or "z")
    pub fn component_mut(&mut self, key: &str) -> Option<&mut f64> {
        match key {
            "x" => Some(&mut self.x),
            "y" => Some(&mut self.y),
            "z" => Some(&mut self.z),
            _ => None,
        }
    }
}

/// Internal representation of a property value on a scene object
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type", content = "value")]
pub enum RawValue {
    /// Plain number (radians, opacity, intensity, ...)
    Scalar(f64),
    /// Vector or Euler rotation
    Vector3(Vector3),
    /// Engine-defined enum sentinel (e.g. material side)
    Constant(i32),
    /// Linear RGB color, channels in [0, 1]
    Color { r: f64, g: f64, b: f64 },
}

impl RawValue {
    /// Short shape name used in error messages
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "scalar",
            Self::Vector3(_) => "vector3",
            Self::Constant(_) => "constant",
            Self::Color { .. } => "color",
        }
    }

    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_vector3(&self) -> Option<Vector3> {
        match self {
            Self::Vector3(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_constant(&self) -> Option<i32> {
        match self {
            Self::Constant(c) => Some(*c),
            _ => None,
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vector3> for RawValue {
    fn from(value: Vector3) -> Self {
        Self::Vector3(value)
    }
}

impl From<Side> for RawValue {
    fn from(value: Side) -> Self {
        Self::Constant(value.constant())
    }
}
