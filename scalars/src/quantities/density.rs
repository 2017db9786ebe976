use crate::Unit;

pub const KILOGRAM_PER_CUBIC_METER: Unit<Density> = Unit::linear("kilogram per cubic meter", "kg/m³", 1.0);
pub const GRAM_PER_CUBIC_CENTIMETER: Unit<Density> = Unit::linear("gram per cubic centimeter", "g/cm³", 1e3);
pub const GRAM_PER_LITER: Unit<Density> = Unit::linear("gram per liter", "g/L", 1.0);

quantity!(
    /// Mass per unit of volume.
    Density,
    name: "Density",
    units: [KILOGRAM_PER_CUBIC_METER, GRAM_PER_CUBIC_CENTIMETER, GRAM_PER_LITER]
);
