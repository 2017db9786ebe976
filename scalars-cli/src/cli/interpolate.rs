use clap::Parser;
use scalars::{Instantiate, Quantity, Scalar};

use crate::{
    cli::quantity::{QuantityArgs, Visitor},
    fmt::FormattedScalar,
    prelude::*,
};

#[derive(Parser)]
pub struct InterpolateArgs {
    #[clap(flatten)]
    quantity: QuantityArgs,

    /// Value at ratio 0, its unit is the unit of the result.
    zero: String,

    /// Value at ratio 1.
    one: String,

    /// Position between the two, values outside of `[0, 1]` extrapolate.
    #[clap(allow_negative_numbers = true)]
    ratio: f32,

    /// Number of decimals to print.
    #[clap(long, env = "PRECISION")]
    precision: Option<usize>,
}

impl InterpolateArgs {
    #[instrument(skip_all, fields(quantity = ?self.quantity.quantity, ratio = self.ratio))]
    pub fn run(self) -> Result {
        let interpolated = self.quantity.visit(Interpolate {
            zero: &self.zero,
            one: &self.one,
            ratio: self.ratio,
            precision: self.precision,
        })?;
        println!("{interpolated}");
        Ok(())
    }
}

struct Interpolate<'a> {
    zero: &'a str,
    one: &'a str,
    ratio: f32,
    precision: Option<usize>,
}

impl Visitor for Interpolate<'_> {
    type Output = String;

    fn visit<Q: Quantity, K: Instantiate<Q>>(self) -> Result<Self::Output> {
        let zero: Scalar<Q, K> = self.zero.parse().with_context(|| format!("failed to parse `{}`", self.zero))?;
        let one: Scalar<Q, K> = self.one.parse().with_context(|| format!("failed to parse `{}`", self.one))?;
        let scalar = Scalar::interpolate(zero, one, self.ratio);
        Ok(FormattedScalar { scalar, precision: self.precision }.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::quantity::QuantityArg;

    fn interpolate(quantity: QuantityArg, absolute: bool, zero: &str, one: &str, ratio: f32) -> Result<String> {
        quantity.visit(absolute, Interpolate { zero, one, ratio, precision: Some(1) })
    }

    #[test]
    fn interpolate_length_ok() {
        assert_eq!(interpolate(QuantityArg::Length, false, "0 m", "10 m", 0.5).unwrap(), "5.0 m");
        assert_eq!(interpolate(QuantityArg::Length, false, "1 km", "3000 m", 0.5).unwrap(), "2.0 km");
    }

    #[test]
    fn interpolate_temperature_reading_ok() {
        assert_eq!(interpolate(QuantityArg::Temperature, true, "10 °C", "30 °C", 0.25).unwrap(), "15.0 °C");
    }

    #[test]
    fn interpolate_invalid_value() {
        assert!(interpolate(QuantityArg::Length, false, "0 m", "10", 0.5).is_err());
    }
}
