//! Angle transformer: radians on the object, degrees in the editor

use super::traits::{ensure_finite, Transformer};
use crate::values::{degrees_to_radians, radians_to_degrees};
use crate::{EditValue, PropDescriptor, RawValue, Target, TransformError};

const KIND: &str = "degrees";

/// Single angle stored in radians, edited in degrees.
#[derive(Debug, Clone, Copy, Default)]
pub struct DegreesTransformer;

impl DegreesTransformer {
    pub fn new() -> Self {
        Self
    }
}

impl Transformer for DegreesTransformer {
    fn kind(&self) -> &'static str {
        KIND
    }

    fn transform(&self, raw: &RawValue) -> Result<PropDescriptor, TransformError> {
        let radians = raw
            .as_scalar()
            .ok_or_else(|| TransformError::raw_mismatch(KIND, "scalar"))?;
        Ok(PropDescriptor::number(radians_to_degrees(radians)))
    }

    fn apply(
        &self,
        target: &mut dyn Target,
        path: &str,
        value: &EditValue,
    ) -> Result<(), TransformError> {
        let EditValue::Number(degrees) = value else {
            return Err(TransformError::edit_mismatch(KIND, "number"));
        };
        let degrees = ensure_finite(KIND, *degrees)?;
        target.set_property(path, RawValue::Scalar(degrees_to_radians(degrees)))
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;
    use crate::SceneObject;

    const EPSILON: f64 = 1e-9;

    fn scalar(object: &SceneObject, path: &str) -> f64 {
        object
            .get(path)
            .and_then(RawValue::as_scalar)
            .expect("scalar property")
    }

    #[test]
    fn quarter_turn_transforms_to_ninety() {
        let descriptor = DegreesTransformer
            .transform(&RawValue::Scalar(PI / 2.0))
            .expect("scalar input");
        let PropDescriptor::Number { value, range, .. } = descriptor else {
            panic!("expected number descriptor");
        };
        assert!((value - 90.0).abs() < EPSILON);
        assert_eq!(range, None);
    }

    #[test]
    fn applying_ninety_writes_quarter_turn() {
        let mut object = SceneObject::new("light");
        DegreesTransformer
            .apply(&mut object, "rotation", &EditValue::Number(90.0))
            .expect("number edit");
        assert!((scalar(&object, "rotation") - PI / 2.0).abs() < EPSILON);
    }

    #[test]
    fn round_trip_preserves_radians() {
        for radians in [0.0, -PI, 0.123_456, 3.0 * PI, -42.5, 1e-6] {
            let mut object = SceneObject::new("mesh").with_property("angle", radians);
            let descriptor = DegreesTransformer
                .transform(&RawValue::Scalar(radians))
                .expect("scalar input");
            DegreesTransformer
                .apply(&mut object, "angle", &descriptor.current_value())
                .expect("round trip");
            assert!((scalar(&object, "angle") - radians).abs() < EPSILON);
        }
    }

    #[test]
    fn rejects_wrong_shapes() {
        let err = DegreesTransformer
            .transform(&RawValue::Constant(1))
            .expect_err("constant is not an angle");
        assert!(matches!(err, TransformError::RawMismatch { .. }));

        let mut object = SceneObject::new("mesh").with_property("angle", 1.0);
        let err = DegreesTransformer
            .apply(&mut object, "angle", &EditValue::literal("90"))
            .expect_err("string is not a number");
        assert!(matches!(err, TransformError::EditMismatch { .. }));
        assert_eq!(scalar(&object, "angle"), 1.0);
    }

    #[test]
    fn rejects_nan_without_writing() {
        let mut object = SceneObject::new("mesh").with_property("angle", 1.0);
        let err = DegreesTransformer
            .apply(&mut object, "angle", &EditValue::Number(f64::NAN))
            .expect_err("nan");
        assert_eq!(err, TransformError::NonFinite { kind: "degrees" });
        assert_eq!(scalar(&object, "angle"), 1.0);
    }
}
