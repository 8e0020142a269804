use tracing::debug;

use crate::prelude::*;
use crate::rotation::earth_rotation;
use crate::sidereal::rotation_angle;

/// Earth-Centered Inertial position, kilometers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ECI {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl ECI {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn as_vector(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    pub fn norm(&self) -> f64 {
        self.as_vector().norm()
    }

    /// Rotates into the Earth-fixed frame at `timestamp`.
    ///
    /// Earth rotation only: no precession, nutation or polar motion.
    pub fn to_ecef(&self, timestamp: &Timestamp) -> ECEF {
        let theta = rotation_angle(timestamp.julian_centuries());
        let ecef = ECEF::from(earth_rotation(theta) * self.as_vector());
        debug!(eci = ?self, ?ecef, theta, "rotated eci to ecef");
        ecef
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn timestamps() -> Vec<Timestamp> {
        vec![
            Timestamp::new(1990, 6, 15, 6, 30, 15.5),
            Timestamp::new(2000, 1, 1, 12, 0, 0.0),
            Timestamp::new(2024, 1, 1, 0, 0, 0.0),
            Timestamp::new(2024, 3, 20, 18, 45, 30.25),
            Timestamp::new(2150, 7, 4, 23, 59, 59.999),
        ]
    }

    #[test]
    fn preserves_magnitude() {
        let eci = ECI::new(6524.834, 6862.875, 6448.296);
        for timestamp in timestamps() {
            let ecef = eci.to_ecef(&timestamp);
            assert_relative_eq!(ecef.norm(), eci.norm(), max_relative = 1e-12);
        }
    }

    #[test]
    fn z_component_is_unchanged() {
        let eci = ECI::new(-4000.0, 5000.0, 1200.123456789);
        for timestamp in timestamps() {
            assert_eq!(eci.to_ecef(&timestamp).z, eci.z);
        }
    }

    #[test]
    fn deterministic() {
        let eci = ECI::new(7000.0, -300.0, 12.5);
        for timestamp in timestamps() {
            let a = eci.to_ecef(&timestamp);
            let b = eci.to_ecef(&timestamp);
            assert_eq!(a.x.to_bits(), b.x.to_bits());
            assert_eq!(a.y.to_bits(), b.y.to_bits());
            assert_eq!(a.z.to_bits(), b.z.to_bits());
        }
    }

    #[test]
    fn origin_stays_at_origin() {
        let ecef = ECI::new(0.0, 0.0, 0.0).to_ecef(&Timestamp::new(2024, 1, 1, 0, 0, 0.0));
        assert_eq!(ecef.norm(), 0.0);
    }

    #[test]
    fn vector_round_trip_through_nalgebra() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(ECI::new(1.0, 2.0, 3.0).as_vector(), v);
        assert_eq!(ECEF::from(v).as_tuple(), (1.0, 2.0, 3.0));
    }

    #[test]
    fn known_value_2024() {
        let ecef = ECI::new(7000.0, 0.0, 0.0).to_ecef(&Timestamp::new(2024, 1, 1, 0, 0, 0.0));
        assert_abs_diff_eq!(ecef.x, -1266.8575624770385, epsilon = 1e-6);
        assert_abs_diff_eq!(ecef.y, -6884.407884226118, epsilon = 1e-6);
        assert_eq!(ecef.z, 0.0);
    }
}
