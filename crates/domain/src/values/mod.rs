//! Value objects - raw values stored on scene objects

mod angle;
mod raw_value;
mod side;

pub use angle::{degrees_to_radians, radians_to_degrees, DEG2RAD, RAD2DEG};
pub use raw_value::{RawValue, Vector3};
pub use side::Side;
