//! Property transformers between scene-graph raw values and editor descriptors.

pub mod descriptors;
pub mod error;
pub mod target;
pub mod transformers;
pub mod values;

pub use descriptors::{EditValue, LiteralOption, LiteralStyle, PropDescriptor};
pub use error::TransformError;
pub use target::{SceneObject, Target};

// Re-export transformer trait, built-ins and registry
pub use transformers::{
    ColorTransformer, DegreesTransformer, EulerTransformer, NormalizedTransformer,
    NumberTransformer, SideTransformer, Transformer, TransformerRegistry, UnknownTokenPolicy,
    Vector3Transformer,
};

pub use values::{degrees_to_radians, radians_to_degrees, RawValue, Side, Vector3, DEG2RAD, RAD2DEG};
