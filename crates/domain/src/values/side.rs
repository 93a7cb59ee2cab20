//! Material side - which faces of a mesh are rendered

use std::fmt;

use serde::{Deserialize, Serialize};

/// Material side, mirroring the renderer's `FrontSide`/`BackSide`/`DoubleSide`
/// constants (0, 1, 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    #[default]
    Front,
    Back,
    Double,
}

impl Side {
    pub const FRONT_SIDE: i32 = 0;
    pub const BACK_SIDE: i32 = 1;
    pub const DOUBLE_SIDE: i32 = 2;

    /// All sides in switch order
    pub fn all() -> &'static [Side] {
        &[Side::Front, Side::Back, Side::Double]
    }

    /// Map a raw renderer constant to a side.
    ///
    /// Any constant other than front or back reads as double-sided.
    pub fn from_constant(constant: i32) -> Self {
        match constant {
            Self::FRONT_SIDE => Side::Front,
            Self::BACK_SIDE => Side::Back,
            _ => Side::Double,
        }
    }

    pub fn constant(&self) -> i32 {
        match self {
            Side::Front => Self::FRONT_SIDE,
            Side::Back => Self::BACK_SIDE,
            Side::Double => Self::DOUBLE_SIDE,
        }
    }

    /// Short token used by the editor switch
    pub fn token(&self) -> &'static str {
        match self {
            Side::Front => "f",
            Side::Back => "b",
            Side::Double => "d",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Side::Front => "Front",
            Side::Back => "Back",
            Side::Double => "Double",
        }
    }

    /// Exact inverse of [`Side::token`]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "f" => Some(Side::Front),
            "b" => Some(Side::Back),
            "d" => Some(Side::Double),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_round_trip() {
        for side in Side::all() {
            assert_eq!(Side::from_constant(side.constant()), *side);
        }
    }

    #[test]
    fn unknown_constant_reads_as_double() {
        assert_eq!(Side::from_constant(7), Side::Double);
        assert_eq!(Side::from_constant(-1), Side::Double);
    }

    #[test]
    fn tokens_round_trip() {
        for side in Side::all() {
            assert_eq!(Side::from_token(side.token()), Some(*side));
        }
        assert_eq!(Side::from_token("x"), None);
    }
}
