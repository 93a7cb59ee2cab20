//! Euler transformer: x/y/z rotation in radians, edited in degrees

use super::traits::Transformer;
use super::vector::write_components;
use crate::values::{degrees_to_radians, radians_to_degrees};
use crate::{EditValue, PropDescriptor, RawValue, Target, TransformError};

const KIND: &str = "euler";

/// Three independent angles, each converted like [`super::DegreesTransformer`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EulerTransformer;

impl EulerTransformer {
    pub fn new() -> Self {
        Self
    }
}

impl Transformer for EulerTransformer {
    fn kind(&self) -> &'static str {
        KIND
    }

    fn transform(&self, raw: &RawValue) -> Result<PropDescriptor, TransformError> {
        let v = raw
            .as_vector3()
            .ok_or_else(|| TransformError::raw_mismatch(KIND, "vector3"))?;
        Ok(PropDescriptor::compound([
            ("x", radians_to_degrees(v.x)),
            ("y", radians_to_degrees(v.y)),
            ("z", radians_to_degrees(v.z)),
        ]))
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
        write_components(KIND, target, path, fields, degrees_to_radians)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;
    use crate::{SceneObject, Vector3};

    const EPSILON: f64 = 1e-9;

    fn rotation(object: &SceneObject) -> Vector3 {
        object
            .get("rotation")
            .and_then(RawValue::as_vector3)
            .expect("rotation")
    }

    fn field(descriptor: &PropDescriptor, key: &str) -> f64 {
        let PropDescriptor::Compound { fields } = descriptor else {
            panic!("expected compound descriptor");
        };
        fields.get(key).copied().expect("field present")
    }

    #[test]
    fn transform_converts_each_axis() {
        let descriptor = EulerTransformer
            .transform(&RawValue::Vector3(Vector3::new(0.0, PI, PI / 2.0)))
            .expect("vector input");
        assert!(field(&descriptor, "x").abs() < EPSILON);
        assert!((field(&descriptor, "y") - 180.0).abs() < EPSILON);
        assert!((field(&descriptor, "z") - 90.0).abs() < EPSILON);
    }

    #[test]
    fn editing_y_leaves_x_and_z() {
        let mut object =
            SceneObject::new("mesh").with_property("rotation", Vector3::new(0.0, PI, PI / 2.0));
        EulerTransformer
            .apply(&mut object, "rotation", &EditValue::compound([("y", 0.0)]))
            .expect("partial edit");

        let v = rotation(&object);
        assert_eq!(v.x, 0.0);
        assert_eq!(v.y, 0.0);
        assert_eq!(v.z, PI / 2.0);
    }

    #[test]
    fn full_edit_from_descriptor_round_trips() {
        let original = Vector3::new(0.0, PI, PI / 2.0);
        let mut object = SceneObject::new("mesh").with_property("rotation", original);

        let descriptor = EulerTransformer
            .transform(&RawValue::Vector3(original))
            .expect("vector input");
        let EditValue::Compound(mut fields) = descriptor.current_value() else {
            panic!("compound edit");
        };
        fields.insert("y".to_string(), 0.0);
        EulerTransformer
            .apply(&mut object, "rotation", &EditValue::Compound(fields))
            .expect("full edit");

        let v = rotation(&object);
        assert!(v.x.abs() < EPSILON);
        assert!(v.y.abs() < EPSILON);
        assert!((v.z - PI / 2.0).abs() < EPSILON);
    }

    #[test]
    fn round_trip_each_component() {
        let samples = [
            Vector3::new(0.1, -0.2, 0.3),
            Vector3::new(-PI, 2.0 * PI, 0.0),
            Vector3::new(12.5, -7.25, 1e-7),
        ];
        for original in samples {
            let mut object = SceneObject::new("mesh").with_property("rotation", original);
            let descriptor = EulerTransformer
                .transform(&RawValue::Vector3(original))
                .expect("vector input");
            EulerTransformer
                .apply(&mut object, "rotation", &descriptor.current_value())
                .expect("round trip");
            let v = rotation(&object);
            assert!((v.x - original.x).abs() < EPSILON);
            assert!((v.y - original.y).abs() < EPSILON);
            assert!((v.z - original.z).abs() < EPSILON);
        }
    }

    #[test]
    fn number_edit_is_rejected() {
        let mut object = SceneObject::new("mesh").with_property("rotation", Vector3::ZERO);
        let err = EulerTransformer
            .apply(&mut object, "rotation", &EditValue::Number(90.0))
            .expect_err("number is not a compound");
        assert!(matches!(err, TransformError::EditMismatch { kind: "euler", .. }));
    }
}
