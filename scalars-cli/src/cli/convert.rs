use clap::Parser;
use scalars::{Instantiate, Quantity, Scalar, Unit};

use crate::{
    cli::quantity::{QuantityArgs, Visitor},
    fmt::FormattedScalar,
    prelude::*,
};

#[derive(Parser)]
pub struct ConvertArgs {
    #[clap(flatten)]
    quantity: QuantityArgs,

    /// Scalar to convert, for example `5 km` or `20°C`.
    value: String,

    /// Symbol or name of the target unit.
    unit: String,

    /// Number of decimals to print.
    #[clap(long, env = "PRECISION")]
    precision: Option<usize>,
}

impl ConvertArgs {
    #[instrument(skip_all, fields(quantity = ?self.quantity.quantity, value = %self.value, unit = %self.unit))]
    pub fn run(self) -> Result {
        let converted = self.quantity.visit(Convert {
            value: &self.value,
            unit: &self.unit,
            precision: self.precision,
        })?;
        println!("{converted}");
        Ok(())
    }
}

struct Convert<'a> {
    value: &'a str,
    unit: &'a str,
    precision: Option<usize>,
}

impl Visitor for Convert<'_> {
    type Output = String;

    fn visit<Q: Quantity, K: Instantiate<Q>>(self) -> Result<Self::Output> {
        let scalar: Scalar<Q, K> =
            self.value.parse().with_context(|| format!("failed to parse `{}`", self.value))?;
        let unit = Unit::<Q>::by_symbol(self.unit)?;
        debug!(?scalar, %unit, "converting…");
        Ok(FormattedScalar { scalar: scalar.to_unit(unit), precision: self.precision }.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::quantity::QuantityArg;

    fn convert(quantity: QuantityArg, absolute: bool, value: &str, unit: &str) -> Result<String> {
        quantity.visit(absolute, Convert { value, unit, precision: Some(2) })
    }

    #[test]
    fn convert_length_ok() {
        assert_eq!(convert(QuantityArg::Length, false, "1.5 km", "m").unwrap(), "1500.00 m");
    }

    #[test]
    fn convert_temperature_reading_ok() {
        assert_eq!(convert(QuantityArg::Temperature, true, "100 °C", "°F").unwrap(), "212.00 °F");
    }

    #[test]
    fn convert_temperature_difference_ok() {
        assert_eq!(convert(QuantityArg::Temperature, false, "100 °C", "°F").unwrap(), "180.00 °F");
    }

    #[test]
    fn convert_unknown_unit() {
        let error = convert(QuantityArg::Length, false, "1.5 km", "kg").unwrap_err();
        assert_eq!(error.to_string(), "unknown Length unit `kg`");
    }

    #[test]
    fn convert_invalid_value() {
        let error = convert(QuantityArg::Length, false, "fast", "m").unwrap_err();
        assert_eq!(error.to_string(), "failed to parse `fast`");
    }
}
