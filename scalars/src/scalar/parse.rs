use std::str::FromStr;

use tracing::trace;

use crate::{Error, Instantiate, Quantity, Result, Scalar, Unit};

impl<Q: Quantity, K: Instantiate<Q>> Scalar<Q, K> {
    /// Build from a magnitude and the symbol (or the name) of one of the quantity's units.
    pub fn of(magnitude: f32, symbol: &str) -> Result<Self> {
        Ok(Self::new(magnitude, Unit::by_symbol(symbol)?))
    }
}

/// Parses `"<number> <unit>"`, the whitespace is optional: `"5 km"`, `"20°C"`, `"-1.5e3 mm"`.
///
/// A bare number is accepted when the quantity has a unit with an empty symbol.
impl<Q: Quantity, K: Instantiate<Q>> FromStr for Scalar<Q, K> {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::Empty { quantity: Q::NAME });
        }

        // The longest numeric prefix followed by a known unit wins, so that `1e3m` is not `1 em`.
        let boundaries = text.char_indices().map(|(index, _)| index).skip(1).chain([text.len()]);
        let mut boundaries: Vec<usize> = boundaries.collect();
        boundaries.reverse();

        for boundary in boundaries {
            let (number, symbol) = text.split_at(boundary);
            let Ok(magnitude) = number.trim_end().parse::<f32>() else {
                continue;
            };
            if let Some(unit) = Unit::find(symbol.trim_start()) {
                trace!(quantity = Q::NAME, text, magnitude, %unit, "parsed");
                return Ok(Self::new(magnitude, unit));
            }
        }

        trace!(quantity = Q::NAME, text, "failed to parse");
        Err(Error::InvalidScalar { quantity: Q::NAME, text: text.to_owned() })
    }
}
