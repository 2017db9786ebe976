use crate::Unit;

pub const CUBIC_METER: Unit<Volume> = Unit::linear("cubic meter", "m³", 1.0);
pub const CUBIC_CENTIMETER: Unit<Volume> = Unit::linear("cubic centimeter", "cm³", 1e-6);
pub const LITER: Unit<Volume> = Unit::linear("liter", "L", 1e-3);
pub const MILLILITER: Unit<Volume> = Unit::linear("milliliter", "mL", 1e-6);
pub const CUBIC_INCH: Unit<Volume> = Unit::linear("cubic inch", "in³", 1.638_706_4e-5);
pub const CUBIC_FOOT: Unit<Volume> = Unit::linear("cubic foot", "ft³", 0.028_316_846_592);

/// US liquid gallon.
pub const GALLON: Unit<Volume> = Unit::linear("gallon", "gal", 3.785_411_784e-3);

quantity!(
    Volume,
    name: "Volume",
    units: [CUBIC_METER, CUBIC_CENTIMETER, LITER, MILLILITER, CUBIC_INCH, CUBIC_FOOT, GALLON]
);
