//! Vector transformer for position and scale, plus the shared x/y/z writer

use std::collections::BTreeMap;

use super::traits::{ensure_finite, Transformer};
use crate::{EditValue, PropDescriptor, RawValue, Target, TransformError, Vector3};

const KIND: &str = "vector3";

/// Position or scale: components are edited as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vector3Transformer;

impl Vector3Transformer {
    pub fn new() -> Self {
        Self
    }
}

impl Transformer for Vector3Transformer {
    fn kind(&self) -> &'static str {
        KIND
    }

    fn transform(&self, raw: &RawValue) -> Result<PropDescriptor, TransformError> {
        let v = raw
            .as_vector3()
            .ok_or_else(|| TransformError::raw_mismatch(KIND, "vector3"))?;
        Ok(PropDescriptor::compound([("x", v.x), ("y", v.y), ("z", v.z)]))
    }

    fn apply(
        &self,
        target: &mut dyn Target,
        path: &str,
        value: &EditValue,
    ) -> Result<(), TransformError> {
        let EditValue::Compound(fields) = value else {
            return Err(TransformError::edit_mismatch(KIND, "x/y/z compound"));
        };
        write_components(KIND, target, path, fields, |v| v)
    }
}

/// Write each edited x/y/z field onto the vector stored at `path`.
///
/// Fields absent from `fields` keep their stored value. When nothing is
/// stored yet, the vector starts from zero. `convert` maps an edited
/// component to its raw value. The result always goes through
/// [`Target::set_property`], so targets that refuse writes stay unchanged.
pub(crate) fn write_components(
    kind: &'static str,
    target: &mut dyn Target,
    path: &str,
    fields: &BTreeMap<String, f64>,
    convert: impl Fn(f64) -> f64,
) -> Result<(), TransformError> {
    let mut vector = match target.property(path) {
        Some(raw) => raw
            .as_vector3()
            .ok_or_else(|| TransformError::raw_mismatch(kind, "vector3"))?,
        None => Vector3::ZERO,
    };

    for (key, value) in fields {
        let value = convert(ensure_finite(kind, *value)?);
        let component = vector
            .component_mut(key)
            .ok_or_else(|| TransformError::edit_mismatch(kind, "x/y/z compound"))?;
        *component = value;
    }

    target.set_property(path, RawValue::Vector3(vector))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SceneObject;

    fn stored(object: &SceneObject, path: &str) -> Vector3 {
        object
            .get(path)
            .and_then(RawValue::as_vector3)
            .expect("vector property")
    }

    #[test]
    fn transform_lists_components() {
        let descriptor = Vector3Transformer
            .transform(&RawValue::Vector3(Vector3::new(1.0, 2.0, 3.0)))
            .expect("vector input");
        assert_eq!(
            descriptor,
            PropDescriptor::compound([("x", 1.0), ("y", 2.0), ("z", 3.0)])
        );
    }

    #[test]
    fn partial_edit_keeps_other_components() {
        let mut object =
            SceneObject::new("mesh").with_property("position", Vector3::new(1.0, 2.0, 3.0));
        Vector3Transformer
            .apply(&mut object, "position", &EditValue::compound([("z", -4.0)]))
            .expect("partial edit");
        assert_eq!(stored(&object, "position"), Vector3::new(1.0, 2.0, -4.0));
    }

    #[test]
    fn missing_property_starts_from_zero() {
        let mut object = SceneObject::new("mesh");
        Vector3Transformer
            .apply(&mut object, "scale", &EditValue::compound([("x", 2.0)]))
            .expect("fresh vector");
        assert_eq!(stored(&object, "scale"), Vector3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn unknown_component_rejected_before_writing() {
        let mut object =
            SceneObject::new("mesh").with_property("position", Vector3::new(1.0, 2.0, 3.0));
        let err = Vector3Transformer
            .apply(
                &mut object,
                "position",
                &EditValue::compound([("x", 9.0), ("w", 1.0)]),
            )
            .expect_err("w is not a component");
        assert!(matches!(err, TransformError::EditMismatch { .. }));
        assert_eq!(stored(&object, "position"), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn wrong_stored_shape_is_reported() {
        let mut object = SceneObject::new("mesh").with_property("position", 1.0);
        let err = Vector3Transformer
            .apply(&mut object, "position", &EditValue::compound([("x", 1.0)]))
            .expect_err("scalar stored");
        assert!(matches!(err, TransformError::RawMismatch { .. }));
    }
}
