use tracing::trace;

use crate::prelude::*;

/// Earth rotation angle in seconds of time, unreduced.
///
/// `t` is Julian centuries since J2000.0. Negative for instants before
/// roughly 1999-12-31.
pub fn rotation_angle_seconds(t: f64) -> f64 {
    Earth::ROTATION_C0 + Earth::ROTATION_C1 * t + Earth::ROTATION_C2 * t * t + Earth::ROTATION_C3 * t * t * t
}

/// Floored modulo by one day: never negative, also when `theta_sec` is.
pub fn reduce_to_day(theta_sec: f64) -> f64 {
    theta_sec.rem_euclid(Earth::SECONDS_PER_DAY)
}

/// Earth rotation angle in radians, reduced to one day of rotation.
pub fn rotation_angle(t: f64) -> f64 {
    let theta_sec = rotation_angle_seconds(t);
    let reduced = reduce_to_day(theta_sec);
    let theta = reduced * Earth::ANGULAR_SPEED;
    trace!(theta_sec, reduced, theta, "earth rotation angle");
    theta
}
