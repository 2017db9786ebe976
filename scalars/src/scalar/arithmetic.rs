//! Same-quantity arithmetic and its relative/absolute closure rules.
//!
//! | Left     | Operator | Right    | Result   |
//! |----------|----------|----------|----------|
//! | Relative | `+`, `-` | Relative | Relative |
//! | Absolute | `+`, `-` | Relative | Absolute |
//! | Relative | `+`      | Absolute | Absolute |
//! | Absolute | `-`      | Absolute | Relative |
//!
//! Absolute plus absolute has no implementation.

use std::{
    iter::Sum,
    ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign},
};

use tracing::debug;

use crate::{Abs, Kind, Quantity, Rel, Scalar, quantities::dimensionless::Dimensionless};

/// Combine two operands of the same quantity.
///
/// When both share a unit, the magnitudes are combined directly and the unit is kept, so there is
/// no conversion error. Otherwise, the SI values are combined and the result is tagged with the
/// standard unit.
fn combine<Q, L, R, O>(
    lhs: Scalar<Q, L>,
    rhs: Scalar<Q, R>,
    magnitudes: fn(f32, f32) -> f32,
    si: fn(f64, f64) -> f64,
) -> Scalar<Q, O>
where
    Q: Quantity,
    L: Kind,
    R: Kind,
    O: Kind,
{
    if lhs.unit == rhs.unit {
        Scalar::instantiate(magnitudes(lhs.magnitude, rhs.magnitude), lhs.unit)
    } else {
        debug!(quantity = Q::NAME, lhs = %lhs.unit, rhs = %rhs.unit, "mixed units, using the standard unit");
        Scalar::instantiate_si(si(lhs.si, rhs.si), Q::STANDARD_UNIT)
    }
}

impl<Q: Quantity, K: Kind> Scalar<Q, K> {
    /// Named form of `+`, available for the same combinations as the operator.
    pub fn plus<Rhs>(self, rhs: Rhs) -> <Self as Add<Rhs>>::Output
    where
        Self: Add<Rhs>,
    {
        self + rhs
    }

    /// Named form of `-`, available for the same combinations as the operator.
    pub fn minus<Rhs>(self, rhs: Rhs) -> <Self as Sub<Rhs>>::Output
    where
        Self: Sub<Rhs>,
    {
        self - rhs
    }

    /// Named form of `*`: a plain factor, or a scalar of another quantity with a declared product.
    pub fn multiply_by<Rhs>(self, rhs: Rhs) -> <Self as Mul<Rhs>>::Output
    where
        Self: Mul<Rhs>,
    {
        self * rhs
    }

    /// Named form of `/`: a plain divisor, a scalar of the same quantity (dimensionless result),
    /// or a scalar of another quantity with a declared quotient.
    pub fn divide_by<Rhs>(self, rhs: Rhs) -> <Self as Div<Rhs>>::Output
    where
        Self: Div<Rhs>,
    {
        self / rhs
    }
}

impl<Q: Quantity> Add for Rel<Q> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        combine(self, rhs, Add::add, Add::add)
    }
}

impl<Q: Quantity> Add<Rel<Q>> for Abs<Q> {
    type Output = Self;

    fn add(self, rhs: Rel<Q>) -> Self::Output {
        combine(self, rhs, Add::add, Add::add)
    }
}

impl<Q: Quantity> Add<Abs<Q>> for Rel<Q> {
    type Output = Abs<Q>;

    fn add(self, rhs: Abs<Q>) -> Self::Output {
        rhs + self
    }
}

impl<Q: Quantity> Sub for Rel<Q> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        combine(self, rhs, Sub::sub, Sub::sub)
    }
}

impl<Q: Quantity> Sub<Rel<Q>> for Abs<Q> {
    type Output = Self;

    fn sub(self, rhs: Rel<Q>) -> Self::Output {
        combine(self, rhs, Sub::sub, Sub::sub)
    }
}

/// Difference between two positions is a displacement.
impl<Q: Quantity> Sub for Abs<Q> {
    type Output = Rel<Q>;

    fn sub(self, rhs: Self) -> Self::Output {
        combine(self, rhs, Sub::sub, Sub::sub)
    }
}

impl<Q: Quantity> AddAssign for Rel<Q> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<Q: Quantity> AddAssign<Rel<Q>> for Abs<Q> {
    fn add_assign(&mut self, rhs: Rel<Q>) {
        *self = *self + rhs;
    }
}

impl<Q: Quantity> SubAssign for Rel<Q> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<Q: Quantity> SubAssign<Rel<Q>> for Abs<Q> {
    fn sub_assign(&mut self, rhs: Rel<Q>) {
        *self = *self - rhs;
    }
}

impl<Q: Quantity> Neg for Rel<Q> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::instantiate(-self.magnitude, self.unit)
    }
}

/// Scale in the current unit, the unit and the kind are preserved.
impl<Q: Quantity, K: Kind> Mul<f32> for Scalar<Q, K> {
    type Output = Self;

    fn mul(self, factor: f32) -> Self::Output {
        Self::instantiate(self.magnitude * factor, self.unit)
    }
}

impl<Q: Quantity> Mul<Rel<Q>> for f32 {
    type Output = Rel<Q>;

    fn mul(self, rhs: Rel<Q>) -> Self::Output {
        rhs * self
    }
}

impl<Q: Quantity, K: Kind> Div<f32> for Scalar<Q, K> {
    type Output = Self;

    fn div(self, divisor: f32) -> Self::Output {
        Self::instantiate(self.magnitude / divisor, self.unit)
    }
}

/// Ratio of two positions, taken on their SI values.
impl<Q: Quantity> Div for Abs<Q> {
    type Output = Rel<Dimensionless>;

    fn div(self, rhs: Self) -> Self::Output {
        Rel::from_si(self.si / rhs.si)
    }
}

impl<Q: Quantity> Sum for Rel<Q> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.reduce(Add::add).unwrap_or(Self::ZERO)
    }
}
