mod args;
mod convert;
mod earth;
mod ecef;
mod eci;
mod prelude;
mod rotation;
mod sidereal;
mod timestamp;

pub use crate::prelude::*;
use crate::args::{Invocation, USAGE, parse_invocation};
use crate::convert::convert;
use anyhow::Result;
use std::io::Write;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Exit status when the argument count is wrong, same as clap uses for usage errors
const USAGE_EXIT_CODE: i32 = 2;

fn write_ecef(out: &mut impl Write, (x, y, z): (f64, f64, f64)) -> Result<()> {
    writeln!(out, "{x:?}")?;
    writeln!(out, "{y:?}")?;
    writeln!(out, "{z:?}")?;
    Ok(())
}

fn main() -> Result<()> {
    // stdout carries only the result
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_invocation(std::env::args_os()) {
        Ok(Invocation::Convert(args)) => args,
        Ok(Invocation::Usage) => {
            println!("{USAGE}");
            std::process::exit(USAGE_EXIT_CODE);
        }
        Err(e) => e.exit(),
    };
    debug!(timestamp = ?args.timestamp(), eci = ?args.eci(), "parsed arguments");

    let ecef = convert(
        args.year,
        args.month,
        args.day,
        args.hour,
        args.minute,
        args.second,
        args.eci_x_km,
        args.eci_y_km,
        args.eci_z_km,
    );
    write_ecef(&mut std::io::stdout().lock(), ecef)?;

    Ok(())
}
