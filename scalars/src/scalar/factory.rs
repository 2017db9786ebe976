use crate::{Absolute, AbsoluteQuantity, Kind, Quantity, Relative, Scalar, Unit};

/// Kinds of scalar that may be constructed for the quantity `Q`.
///
/// Every quantity admits relative scalars, only an [`AbsoluteQuantity`] admits absolute ones.
/// Generic code uses this bound to build correctly typed results without naming the concrete
/// quantity: `Scalar::<Q, K>::new` is the factory.
pub trait Instantiate<Q: Quantity>: Kind {}

impl<Q: Quantity> Instantiate<Q> for Relative {}

impl<Q: AbsoluteQuantity> Instantiate<Q> for Absolute {}

impl<Q: Quantity, K: Instantiate<Q>> Scalar<Q, K> {
    pub fn new(magnitude: f32, unit: Unit<Q>) -> Self {
        Self::instantiate(magnitude, unit)
    }

    /// Build from a double-precision magnitude, narrowing it to `f32`.
    #[expect(clippy::cast_possible_truncation)]
    pub fn from_f64(magnitude: f64, unit: Unit<Q>) -> Self {
        Self::instantiate(magnitude as f32, unit)
    }

    /// Build from a value in the base unit, tagged with the standard unit.
    ///
    /// The value is narrowed to the `f32` magnitude, and the SI value is the one of that magnitude.
    pub fn from_si(si: f64) -> Self {
        Self::instantiate_si(si, Q::STANDARD_UNIT)
    }
}
