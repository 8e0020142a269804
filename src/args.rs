use std::ffi::OsString;
use std::num::{ParseFloatError, ParseIntError};

use clap::Parser;

use crate::prelude::*;

pub const USAGE: &str = "Usage: eci_to_ecef year month day hour minute second eci_x_km eci_y_km eci_z_km";

const ARG_COUNT: usize = 9;

#[derive(thiserror::Error, Debug)]
pub enum ArgError {
    #[error("invalid numeric argument '{0}': expected an integer ({1})")]
    InvalidInteger(String, ParseIntError),
    #[error("invalid numeric argument '{0}': expected a real number ({1})")]
    InvalidReal(String, ParseFloatError),
}

fn integer(text: &str) -> Result<i64, ArgError> {
    text.trim()
        .parse()
        .map_err(|e| ArgError::InvalidInteger(text.to_string(), e))
}

fn real(text: &str) -> Result<f64, ArgError> {
    text.trim()
        .parse()
        .map_err(|e| ArgError::InvalidReal(text.to_string(), e))
}

/// Converts an ECI position (km) at a UTC instant to ECEF (km)
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(allow_negative_numbers = true, disable_help_flag = true)]
pub struct Args {
    #[arg(value_parser = integer, allow_hyphen_values = true)]
    pub year: i64,

    /// 1-12
    #[arg(value_parser = integer, allow_hyphen_values = true)]
    pub month: i64,

    /// 1-31
    #[arg(value_parser = integer, allow_hyphen_values = true)]
    pub day: i64,

    /// 0-23
    #[arg(value_parser = integer, allow_hyphen_values = true)]
    pub hour: i64,

    /// 0-59
    #[arg(value_parser = integer, allow_hyphen_values = true)]
    pub minute: i64,

    /// 0 <= second < 60
    #[arg(value_parser = real, allow_hyphen_values = true)]
    pub second: f64,

    #[arg(value_parser = real, allow_hyphen_values = true)]
    pub eci_x_km: f64,

    #[arg(value_parser = real, allow_hyphen_values = true)]
    pub eci_y_km: f64,

    #[arg(value_parser = real, allow_hyphen_values = true)]
    pub eci_z_km: f64,
}

impl Args {
    pub fn timestamp(&self) -> Timestamp {
        Timestamp::new(self.year, self.month, self.day, self.hour, self.minute, self.second)
    }

    pub fn eci(&self) -> ECI {
        ECI::new(self.eci_x_km, self.eci_y_km, self.eci_z_km)
    }
}

#[derive(Debug, PartialEq)]
pub enum Invocation {
    /// Wrong argument count, nothing to convert
    Usage,
    Convert(Args),
}

/// `argv` includes the program name.
pub fn parse_invocation<I, T>(argv: I) -> Result<Invocation, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    if argv.len() != ARG_COUNT + 1 {
        return Ok(Invocation::Usage);
    }
    Args::try_parse_from(argv).map(Invocation::Convert)
}
