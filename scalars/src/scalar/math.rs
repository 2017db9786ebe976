//! Unary functions.
//!
//! Every function applies to the magnitude in the scalar's current unit, not to the SI value,
//! and the result keeps that unit. Convert with [`Scalar::to_unit`] first where it matters:
//! the sine of `90 °` is not the sine of `π/2 rad`.

use crate::{Kind, Quantity, Rel, Scalar};

macro_rules! unary {
    ($($(#[$meta:meta])* $name:ident => $function:expr;)+) => {
        $(
            $(#[$meta])*
            pub fn $name(self) -> Self {
                self.map($function)
            }
        )+
    };
}

impl<Q: Quantity, K: Kind> Scalar<Q, K> {
    /// Apply `function` to the magnitude in double precision and narrow the result back.
    #[expect(clippy::cast_possible_truncation)]
    fn map(self, function: impl FnOnce(f64) -> f64) -> Self {
        Self::instantiate(function(f64::from(self.magnitude)) as f32, self.unit)
    }

    unary! {
        ceil => f64::ceil;
        floor => f64::floor;

        /// Round half up: `2.5` becomes `3`, `-2.5` becomes `-2`.
        round => |x| (x + 0.5).floor();

        /// Round half to even: `2.5` becomes `2`, `3.5` becomes `4`.
        rint => f64::round_ties_even;
    }
}

impl<Q: Quantity> Rel<Q> {
    unary! {
        abs => f64::abs;

        sin => f64::sin;
        cos => f64::cos;
        tan => f64::tan;
        asin => f64::asin;
        acos => f64::acos;
        atan => f64::atan;
        sinh => f64::sinh;
        cosh => f64::cosh;
        tanh => f64::tanh;

        exp => f64::exp;
        exp_m1 => f64::exp_m1;

        /// Natural logarithm.
        ln => f64::ln;
        log10 => f64::log10;
        ln_1p => f64::ln_1p;

        sqrt => f64::sqrt;
        cbrt => f64::cbrt;

        /// `-1` or `1` by sign, zero and NaN stay as they are.
        signum => |x| if x == 0.0 || x.is_nan() { x } else { x.signum() };

        /// Reciprocal of the magnitude.
        inv => f64::recip;

        to_degrees => f64::to_degrees;
        to_radians => f64::to_radians;
    }

    pub fn pow(self, exponent: f32) -> Self {
        self.map(|x| x.powf(f64::from(exponent)))
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::quantities::{
        angle::{Angle, DEGREE, RADIAN},
        dimensionless::{Dimensionless, UNIT},
        length::{KILOMETER, Length, METER},
        temperature::{AbsoluteTemperature, DEGREE_CELSIUS},
    };

    #[test]
    fn applies_to_magnitude_in_current_unit() {
        let right_angle = Rel::<Angle>::new(90.0, DEGREE);
        let sine = right_angle.sin();
        assert_eq!(sine.unit(), DEGREE);
        assert_abs_diff_eq!(sine.magnitude(), 90.0_f32.sin(), epsilon = 1e-6);
        assert_abs_diff_eq!(right_angle.to_unit(RADIAN).sin().magnitude(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn keeps_unit() {
        let root = Rel::<Length>::new(16.0, KILOMETER).sqrt();
        assert_eq!(root.unit(), KILOMETER);
        assert_abs_diff_eq!(root.magnitude(), 4.0);
        assert_abs_diff_eq!(root.si(), 4000.0);
    }

    #[test]
    fn round_half_up() {
        assert_abs_diff_eq!(Rel::<Length>::new(2.5, METER).round().magnitude(), 3.0);
        assert_abs_diff_eq!(Rel::<Length>::new(-2.5, METER).round().magnitude(), -2.0);
        assert_abs_diff_eq!(Rel::<Length>::new(2.4, METER).round().magnitude(), 2.0);
    }

    #[test]
    fn rint_half_even() {
        assert_abs_diff_eq!(Rel::<Length>::new(2.5, METER).rint().magnitude(), 2.0);
        assert_abs_diff_eq!(Rel::<Length>::new(3.5, METER).rint().magnitude(), 4.0);
    }

    #[test]
    fn rounding_on_absolute() {
        let reading = AbsoluteTemperature::new(21.6, DEGREE_CELSIUS);
        assert_abs_diff_eq!(reading.ceil().magnitude(), 22.0);
        assert_abs_diff_eq!(reading.floor().magnitude(), 21.0);
        assert_abs_diff_eq!(reading.round().magnitude(), 22.0);
        assert_abs_diff_eq!(reading.rint().si(), 295.15, epsilon = 1e-9);
        assert_eq!(reading.round().unit(), DEGREE_CELSIUS);
    }

    #[test]
    fn signum_ok() {
        assert_abs_diff_eq!(Rel::<Length>::new(-3.0, METER).signum().magnitude(), -1.0);
        assert_abs_diff_eq!(Rel::<Length>::new(3.0, METER).signum().magnitude(), 1.0);
        assert!(Rel::<Length>::ZERO.signum().is_zero());
        assert!(Rel::<Length>::NAN.signum().is_nan());
    }

    #[test]
    fn inv_ok() {
        assert_abs_diff_eq!(Rel::<Length>::new(4.0, METER).inv().magnitude(), 0.25);
        assert!(Rel::<Length>::ZERO.inv().magnitude().is_infinite());
    }

    #[test]
    fn pow_ok() {
        assert_abs_diff_eq!(Rel::<Length>::new(3.0, METER).pow(2.0).magnitude(), 9.0);
        assert_abs_diff_eq!(Rel::<Length>::new(27.0, METER).cbrt().magnitude(), 3.0, epsilon = 1e-6);
    }

    #[test]
    fn logarithms_ok() {
        let hundred = Rel::<Dimensionless>::new(100.0, UNIT);
        assert_abs_diff_eq!(hundred.log10().magnitude(), 2.0);
        assert_abs_diff_eq!(Rel::<Dimensionless>::ONE.exp().ln().magnitude(), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(Rel::<Dimensionless>::ZERO.ln_1p().magnitude(), 0.0);
        assert_abs_diff_eq!(Rel::<Dimensionless>::ZERO.exp_m1().magnitude(), 0.0);
    }

    #[test]
    fn angle_units_ok() {
        let radians = Rel::<Angle>::new(FRAC_PI_2, RADIAN);
        assert_abs_diff_eq!(radians.to_degrees().magnitude(), 90.0, epsilon = 1e-4);
        assert_abs_diff_eq!(Rel::<Angle>::new(180.0, DEGREE).to_radians().magnitude(), std::f32::consts::PI);
    }

    #[test]
    fn out_of_domain_is_nan() {
        assert!(Rel::<Dimensionless>::new(2.0, UNIT).acos().is_nan());
        assert!(Rel::<Length>::new(-1.0, METER).sqrt().is_nan());
    }
}
