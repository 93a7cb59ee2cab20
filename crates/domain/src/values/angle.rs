//! Radian/degree conversion shared by the angle transformers

use std::f64::consts::PI;

/// Multiply radians by this to get degrees
pub const RAD2DEG: f64 = 180.0 / PI;

/// Multiply degrees by this to get radians
pub const DEG2RAD: f64 = PI / 180.0;

pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * RAD2DEG
}

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * DEG2RAD
}
