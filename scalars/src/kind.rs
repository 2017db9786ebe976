//! Relative and absolute flavours of a scalar.

use crate::Unit;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Relative {}
    impl Sealed for super::Absolute {}
}

/// Whether a scalar is a difference or a position on a scale.
///
/// The kind decides how a magnitude maps onto the base unit: differences use only the unit scale,
/// positions also apply the unit offset.
pub trait Kind: sealed::Sealed + 'static {
    /// Short label used in debug output.
    const LABEL: &'static str;

    fn to_si<Q>(unit: &Unit<Q>, magnitude: f64) -> f64;

    fn from_si<Q>(unit: &Unit<Q>, si: f64) -> f64;
}

/// Magnitude without an origin: a duration, a displacement, a temperature difference.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Relative {}

/// Magnitude anchored to the origin of its scale: a point in time, a position, a temperature reading.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Absolute {}

impl Kind for Relative {
    const LABEL: &'static str = "Rel";

    fn to_si<Q>(unit: &Unit<Q>, magnitude: f64) -> f64 {
        unit.to_base_delta(magnitude)
    }

    fn from_si<Q>(unit: &Unit<Q>, si: f64) -> f64 {
        unit.from_base_delta(si)
    }
}

impl Kind for Absolute {
    const LABEL: &'static str = "Abs";

    fn to_si<Q>(unit: &Unit<Q>, magnitude: f64) -> f64 {
        unit.to_base(magnitude)
    }

    fn from_si<Q>(unit: &Unit<Q>, si: f64) -> f64 {
        unit.from_base(si)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::quantities::temperature::DEGREE_CELSIUS;

    #[test]
    fn relative_ignores_offset() {
        assert_abs_diff_eq!(Relative::to_si(&DEGREE_CELSIUS, 5.0), 5.0);
        assert_abs_diff_eq!(Relative::from_si(&DEGREE_CELSIUS, 5.0), 5.0);
    }

    #[test]
    fn absolute_applies_offset() {
        assert_abs_diff_eq!(Absolute::to_si(&DEGREE_CELSIUS, 5.0), 278.15, epsilon = 1e-12);
        assert_abs_diff_eq!(Absolute::from_si(&DEGREE_CELSIUS, 278.15), 5.0, epsilon = 1e-12);
    }
}
