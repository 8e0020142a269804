pub struct Earth {}

impl Earth {
    /// rad/s
    pub const ANGULAR_SPEED: f64 = 7.292115E-5;
    pub const SECONDS_PER_DAY: f64 = 86400.0;
    pub const J2000_JULIAN_DATE: f64 = 2451545.0;
    pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

    // Rotation angle polynomial in Julian centuries, seconds of time
    pub const ROTATION_C0: f64 = 67310.54841;
    pub const ROTATION_C1: f64 = 876600.0 * 3600.0 + 8640184.812866;
    pub const ROTATION_C2: f64 = 0.093104;
    pub const ROTATION_C3: f64 = -6.2E-6;
}
