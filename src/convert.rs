use crate::prelude::*;

/// ECI position in kilometers at a UTC calendar instant to ECEF kilometers.
///
/// Total over finite input. Calendar fields are not validated.
#[allow(clippy::too_many_arguments)]
pub fn convert(
    year: i64,
    month: i64,
    day: i64,
    hour: i64,
    minute: i64,
    second: f64,
    eci_x: f64,
    eci_y: f64,
    eci_z: f64,
) -> (f64, f64, f64) {
    let timestamp = Timestamp::new(year, month, day, hour, minute, second);
    ECI::new(eci_x, eci_y, eci_z).to_ecef(&timestamp).as_tuple()
}
