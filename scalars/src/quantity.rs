use crate::Unit;

/// Compile-time identity of a physical quantity.
///
/// Implementors are zero-sized tags: the quantity never exists as a runtime value, so mixing up
/// two quantities is a type error rather than a runtime check.
pub trait Quantity: Sized + 'static {
    const NAME: &'static str;

    /// Unit that tags the result when two operands in different units are combined.
    ///
    /// It is always the base unit of the quantity: scale 1, no offset.
    const STANDARD_UNIT: Unit<Self>;

    /// Unit catalog, the standard unit included.
    const UNITS: &'static [Unit<Self>];
}

/// Quantity that also has a positioned, absolute form (a point in time, a temperature reading).
pub trait AbsoluteQuantity: Quantity {}
