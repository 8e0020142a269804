use tracing::debug;

use crate::prelude::*;

/// UTC calendar instant.
///
/// Fields are not range checked. A month of 13 or a second of 75 is carried
/// through the Julian date arithmetic and yields a defined, if meaningless,
/// result.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timestamp {
    pub year: i64,
    pub month: i64,
    pub day: i64,
    pub hour: i64,
    pub minute: i64,
    /// 0 <= second < 60 for well formed input
    pub second: f64,
}

impl Timestamp {
    pub fn new(year: i64, month: i64, day: i64, hour: i64, minute: i64, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Julian Day Number of the calendar date (Fliegel & Van Flandern, 1968).
    ///
    /// Every division truncates toward zero, as in the Fortran original. For
    /// January and February `(month - 14) / 12` is -1, for the rest of the
    /// year it is 0. Computed in i128 so no i64 field can overflow it.
    pub fn julian_day_number(&self) -> i128 {
        let year = self.year as i128;
        let month = self.month as i128;
        let day = self.day as i128;

        let a = (month - 14) / 12;
        day - 32075 + 1461 * (year + 4800 + a) / 4 + 367 * (month - 2 - a * 12) / 12
            - 3 * ((year + 4900 + a) / 100) / 4
    }

    /// Julian date at 00:00 of the calendar date.
    pub fn julian_date_midnight(&self) -> f64 {
        self.julian_day_number() as f64 - 0.5
    }

    /// Fraction of the day elapsed since midnight.
    pub fn day_fraction(&self) -> f64 {
        (self.second + 60.0 * (self.minute as f64 + 60.0 * self.hour as f64)) / Earth::SECONDS_PER_DAY
    }

    pub fn julian_date(&self) -> f64 {
        self.julian_date_midnight() + self.day_fraction()
    }

    /// Julian centuries elapsed since J2000.0.
    pub fn julian_centuries(&self) -> f64 {
        let jd = self.julian_date();
        let t = (jd - Earth::J2000_JULIAN_DATE) / Earth::DAYS_PER_JULIAN_CENTURY;
        debug!(jd, t, "julian date");
        t
    }
}
