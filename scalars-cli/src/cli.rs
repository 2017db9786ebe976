mod compare;
mod convert;
mod interpolate;
mod quantity;
mod units;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use scalars::Tolerance;

pub use self::compare::Comparison;
use crate::cli::{compare::CompareArgs, convert::ConvertArgs, interpolate::InterpolateArgs, units::UnitsArgs};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    /// TOML configuration file, defaults are used when it does not exist.
    #[clap(long, env = "SCALARS_CONFIG", default_value = "scalars.toml")]
    pub config: PathBuf,

    #[clap(flatten)]
    pub tolerance: ToleranceArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Express a scalar in another unit.
    #[clap(name = "convert")]
    Convert(ConvertArgs),

    /// Interpolate linearly between two scalars.
    #[clap(name = "interpolate")]
    Interpolate(InterpolateArgs),

    /// Compare two scalars exactly and within the tolerance.
    #[clap(name = "compare")]
    Compare(CompareArgs),

    /// List the units of a quantity.
    #[clap(name = "units")]
    Units(UnitsArgs),
}

/// Overrides of the configured tolerance.
#[derive(Parser)]
pub struct ToleranceArgs {
    /// Largest absolute difference of SI values that is still equal.
    #[clap(long, env = "ABSOLUTE_TOLERANCE")]
    absolute_tolerance: Option<f64>,

    /// Largest difference of SI values, relative to the larger one, that is still equal.
    #[clap(long, env = "RELATIVE_TOLERANCE")]
    relative_tolerance: Option<f64>,
}

impl ToleranceArgs {
    pub fn apply(&self, mut tolerance: Tolerance) -> Tolerance {
        if let Some(absolute) = self.absolute_tolerance {
            tolerance.absolute = absolute;
        }
        if let Some(relative) = self.relative_tolerance {
            tolerance.relative = relative;
        }
        tolerance
    }
}
