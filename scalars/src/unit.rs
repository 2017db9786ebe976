use std::{
    fmt::{Debug, Formatter},
    marker::PhantomData,
};

use tracing::trace;

use crate::{Error, Quantity, Result};

/// Measurement unit of the quantity `Q`.
///
/// A unit converts a raw magnitude into the quantity's base unit as `magnitude * scale + offset`.
/// The offset is non-zero only for interval-scale units such as degree Celsius.
#[must_use]
#[derive(derive_more::Display)]
#[display("{symbol}")]
pub struct Unit<Q> {
    name: &'static str,
    symbol: &'static str,

    /// Multiplier to the base unit, never zero.
    scale: f64,

    /// Base-unit value of this unit's zero point.
    offset: f64,

    quantity: PhantomData<fn() -> Q>,
}

impl<Q> Unit<Q> {
    /// Ratio-scale unit: `base = magnitude * scale`.
    pub const fn linear(name: &'static str, symbol: &'static str, scale: f64) -> Self {
        Self::affine(name, symbol, scale, 0.0)
    }

    /// Interval-scale unit: `base = magnitude * scale + offset`.
    pub const fn affine(name: &'static str, symbol: &'static str, scale: f64, offset: f64) -> Self {
        assert!(scale != 0.0, "unit scale must be non-zero");
        Self { name, symbol, scale, offset, quantity: PhantomData }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Multiplier to the base unit, never zero.
    #[must_use]
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub const fn offset(&self) -> f64 {
        self.offset
    }

    /// Express a positioned value in the base unit.
    #[must_use]
    pub const fn to_base(&self, magnitude: f64) -> f64 {
        magnitude * self.scale + self.offset
    }

    /// Express a positioned base-unit value in this unit.
    #[must_use]
    pub const fn from_base(&self, base: f64) -> f64 {
        (base - self.offset) / self.scale
    }

    /// Convert a positioned value between two units of the same quantity.
    #[must_use]
    pub const fn convert(magnitude: f64, from: &Self, to: &Self) -> f64 {
        to.from_base(from.to_base(magnitude))
    }

    /// Express a difference in the base unit, the offset does not apply.
    #[must_use]
    pub const fn to_base_delta(&self, magnitude: f64) -> f64 {
        magnitude * self.scale
    }

    #[must_use]
    pub const fn from_base_delta(&self, base: f64) -> f64 {
        base / self.scale
    }

    #[must_use]
    pub const fn convert_delta(magnitude: f64, from: &Self, to: &Self) -> f64 {
        to.from_base_delta(from.to_base_delta(magnitude))
    }

    #[must_use]
    pub const fn has_offset(&self) -> bool {
        self.offset != 0.0
    }
}

impl<Q: Quantity> Unit<Q> {
    /// Designated unit of the quantity, used to tag results of cross-unit arithmetic.
    pub const fn standard() -> Self {
        Q::STANDARD_UNIT
    }

    #[must_use]
    pub fn is_standard(&self) -> bool {
        *self == Q::STANDARD_UNIT
    }

    /// Resolve a unit of `Q` by its exact symbol or by its case-insensitive name.
    pub fn by_symbol(symbol: &str) -> Result<Self> {
        let symbol = symbol.trim();
        let unit = Self::find(symbol);
        trace!(quantity = Q::NAME, symbol, found = unit.is_some(), "looked up the unit");
        unit.ok_or_else(|| Error::UnknownUnit { quantity: Q::NAME, symbol: symbol.to_owned() })
    }

    pub(crate) fn find(symbol: &str) -> Option<Self> {
        Q::UNITS
            .iter()
            .find(|unit| unit.symbol == symbol)
            .or_else(|| Q::UNITS.iter().find(|unit| unit.name.eq_ignore_ascii_case(symbol)))
            .copied()
    }
}

impl<Q> Clone for Unit<Q> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Q> Copy for Unit<Q> {}

impl<Q> PartialEq for Unit<Q> {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol
            && self.scale.to_bits() == other.scale.to_bits()
            && self.offset.to_bits() == other.offset.to_bits()
    }
}

impl<Q> Eq for Unit<Q> {}

impl<Q> Debug for Unit<Q> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.has_offset() {
            write!(f, "{}(×{}{:+})", self.symbol, self.scale, self.offset)
        } else {
            write!(f, "{}(×{})", self.symbol, self.scale)
        }
    }
}
