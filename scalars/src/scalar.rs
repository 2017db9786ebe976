mod arithmetic;
mod extrema;
mod factory;
mod math;
mod parse;

use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter},
    hash::{Hash, Hasher},
    marker::PhantomData,
};

use ordered_float::OrderedFloat;

pub use self::factory::Instantiate;
use crate::{Absolute, AbsoluteQuantity, Kind, Quantity, Relative, Unit};

/// Immutable magnitude of the quantity `Q` expressed in one of its units.
///
/// Besides the magnitude and its unit, a scalar carries the same value in the quantity's base
/// unit (the SI value), computed once at construction. Equality, ordering and hashing only look
/// at the SI value, so `5 m` equals `5000 mm`.
#[must_use]
pub struct Scalar<Q, K> {
    magnitude: f32,
    unit: Unit<Q>,
    si: f64,
    kind: PhantomData<fn() -> K>,
}

/// Difference or extent: a duration, a length, a temperature delta.
pub type Rel<Q> = Scalar<Q, Relative>;

/// Position on a scale with an origin: an instant, a location, a temperature reading.
///
/// Two absolute scalars cannot be added:
///
/// ```compile_fail
/// use scalars::{Abs, quantities::temperature::{DEGREE_CELSIUS, Temperature}};
///
/// let morning = Abs::<Temperature>::new(12.0, DEGREE_CELSIUS);
/// let evening = Abs::<Temperature>::new(18.0, DEGREE_CELSIUS);
/// let _ = morning + evening;
/// ```
pub type Abs<Q> = Scalar<Q, Absolute>;

impl<Q: Quantity, K: Kind> Scalar<Q, K> {
    /// Build from a magnitude in `unit`, the SI value follows from the kind's conversion.
    pub(crate) fn instantiate(magnitude: f32, unit: Unit<Q>) -> Self {
        Self { magnitude, unit, si: K::to_si(&unit, f64::from(magnitude)), kind: PhantomData }
    }

    /// Build from an SI value expressed in `unit`.
    ///
    /// The magnitude is narrowed first and the SI value is recomputed from it, so the cached SI
    /// value always agrees with the magnitude and the unit.
    #[expect(clippy::cast_possible_truncation)]
    pub(crate) fn instantiate_si(si: f64, unit: Unit<Q>) -> Self {
        Self::instantiate(K::from_si(&unit, si) as f32, unit)
    }

    /// Magnitude in the scalar's own unit.
    #[must_use]
    pub const fn magnitude(&self) -> f32 {
        self.magnitude
    }

    /// Magnitude converted to `unit`.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn in_unit(&self, unit: Unit<Q>) -> f32 {
        if unit == self.unit { self.magnitude } else { K::from_si(&unit, self.si) as f32 }
    }

    pub const fn unit(&self) -> Unit<Q> {
        self.unit
    }

    /// Value in the base unit of the quantity.
    #[must_use]
    pub const fn si(&self) -> f64 {
        self.si
    }

    /// Same value re-expressed in `unit`.
    pub fn to_unit(self, unit: Unit<Q>) -> Self {
        if unit == self.unit { self } else { Self::instantiate_si(self.si, unit) }
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.si == 0.0
    }

    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.si > 0.0
    }

    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.si < 0.0
    }

    #[must_use]
    pub const fn is_nan(&self) -> bool {
        self.si.is_nan()
    }
}

impl<Q: Quantity> Scalar<Q, Relative> {
    pub const ZERO: Self = Self::standard(0.0);
    pub const ONE: Self = Self::standard(1.0);
    pub const NAN: Self = Self::standard(f32::NAN);
    pub const INFINITY: Self = Self::standard(f32::INFINITY);
    pub const NEG_INFINITY: Self = Self::standard(f32::NEG_INFINITY);
    pub const MAX: Self = Self::standard(f32::MAX);
    pub const MIN: Self = Self::standard(f32::MIN);

    #[allow(clippy::cast_lossless)]
    const fn standard(magnitude: f32) -> Self {
        Self {
            magnitude,
            unit: Q::STANDARD_UNIT,
            si: Q::STANDARD_UNIT.to_base_delta(magnitude as f64),
            kind: PhantomData,
        }
    }
}

impl<Q: AbsoluteQuantity> Scalar<Q, Relative> {
    /// Reinterpret the difference as a position, keeping the magnitude and the unit.
    pub fn to_absolute(self) -> Abs<Q> {
        Abs::instantiate(self.magnitude, self.unit)
    }
}

impl<Q: Quantity> Scalar<Q, Absolute> {
    /// Reinterpret the position as a difference from the scale origin, keeping the magnitude and the unit.
    pub fn to_relative(self) -> Rel<Q> {
        Rel::instantiate(self.magnitude, self.unit)
    }
}

impl<Q, K> Clone for Scalar<Q, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Q, K> Copy for Scalar<Q, K> {}

impl<Q, K> PartialEq for Scalar<Q, K> {
    fn eq(&self, other: &Self) -> bool {
        OrderedFloat(self.si).eq(&OrderedFloat(other.si))
    }
}

impl<Q, K> Eq for Scalar<Q, K> {}

impl<Q, K> PartialOrd for Scalar<Q, K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Q, K> Ord for Scalar<Q, K> {
    fn cmp(&self, other: &Self) -> Ordering {
        OrderedFloat(self.si).cmp(&OrderedFloat(other.si))
    }
}

impl<Q, K> Hash for Scalar<Q, K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        OrderedFloat(self.si).hash(state);
    }
}

impl<Q, K> Display for Scalar<Q, K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*}", precision, self.magnitude)?,
            None => write!(f, "{}", self.magnitude)?,
        }
        if !self.unit.symbol().is_empty() {
            write!(f, " {}", self.unit.symbol())?;
        }
        Ok(())
    }
}

impl<Q, K: Kind> Debug for Scalar<Q, K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?}", K::LABEL, self.magnitude)?;
        if !self.unit.symbol().is_empty() {
            write!(f, " {}", self.unit.symbol())?;
        }
        if f.alternate() {
            write!(f, " (si {:?})", self.si)?;
        }
        Ok(())
    }
}
