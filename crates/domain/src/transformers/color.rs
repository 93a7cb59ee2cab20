//! Color transformer: RGB on the object, RGBA in the editor

use super::traits::{ensure_finite, Transformer};
use crate::{EditValue, PropDescriptor, RawValue, Target, TransformError};

const KIND: &str = "color";

/// Linear RGB color. Alpha is always shown as 1 and dropped on apply.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorTransformer;

impl ColorTransformer {
    pub fn new() -> Self {
        Self
    }
}

impl Transformer for ColorTransformer {
    fn kind(&self) -> &'static str {
        KIND
    }

    fn transform(&self, raw: &RawValue) -> Result<PropDescriptor, TransformError> {
        let RawValue::Color { r, g, b } = raw else {
            return Err(TransformError::raw_mismatch(KIND, "color"));
        };
        Ok(PropDescriptor::Rgba {
            r: *r,
            g: *g,
            b: *b,
            a: 1.0,
        })
    }

    fn apply(
        &self,
        target: &mut dyn Target,
        path: &str,
        value: &EditValue,
    ) -> Result<(), TransformError> {
        let EditValue::Rgba { r, g, b, .. } = value else {
            return Err(TransformError::edit_mismatch(KIND, "rgba"));
        };
        let channel = |c: f64| ensure_finite(KIND, c).map(|c| c.clamp(0.0, 1.0));
        let color = RawValue::Color {
            r: channel(*r)?,
            g: channel(*g)?,
            b: channel(*b)?,
        };
        target.set_property(path, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SceneObject;

    #[test]
    fn transform_adds_opaque_alpha() {
        let descriptor = ColorTransformer
            .transform(&RawValue::Color {
                r: 1.0,
                g: 0.5,
                b: 0.0,
            })
            .expect("color");
        assert_eq!(
            descriptor,
            PropDescriptor::Rgba {
                r: 1.0,
                g: 0.5,
                b: 0.0,
                a: 1.0
            }
        );
    }

    #[test]
    fn apply_clamps_and_drops_alpha() {
        let mut object = SceneObject::new("material");
        ColorTransformer
            .apply(
                &mut object,
                "color",
                &EditValue::Rgba {
                    r: 1.5,
                    g: 0.25,
                    b: -1.0,
                    a: 0.3,
                },
            )
            .expect("rgba edit");
        assert_eq!(
            object.get("color"),
            Some(&RawValue::Color {
                r: 1.0,
                g: 0.25,
                b: 0.0
            })
        );
    }

    #[test]
    fn scalar_is_not_a_color() {
        let err = ColorTransformer
            .transform(&RawValue::Scalar(1.0))
            .expect_err("scalar");
        assert!(matches!(err, TransformError::RawMismatch { kind: "color", .. }));
    }
}
