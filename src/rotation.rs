use crate::prelude::*;

/// Inertial to Earth-fixed rotation about the polar axis by `theta` radians.
///
/// Built from the negated angle, which makes it the transpose of the usual
/// right-handed Rz(theta).
pub fn earth_rotation(theta: f64) -> Matrix3<f64> {
    let (sin, cos) = (-theta).sin_cos();
    Matrix3::new(
        cos, -sin, 0.0,
        sin, cos, 0.0,
        0.0, 0.0, 1.0,
    )
}
