use crate::Unit;

pub const KILOGRAM: Unit<Mass> = Unit::linear("kilogram", "kg", 1.0);
pub const GRAM: Unit<Mass> = Unit::linear("gram", "g", 1e-3);
pub const MILLIGRAM: Unit<Mass> = Unit::linear("milligram", "mg", 1e-6);
pub const MICROGRAM: Unit<Mass> = Unit::linear("microgram", "µg", 1e-9);
pub const TONNE: Unit<Mass> = Unit::linear("tonne", "t", 1e3);
pub const POUND: Unit<Mass> = Unit::linear("pound", "lb", 0.453_592_37);
pub const OUNCE: Unit<Mass> = Unit::linear("ounce", "oz", 0.028_349_523_125);

quantity!(Mass, name: "Mass", units: [KILOGRAM, GRAM, MILLIGRAM, MICROGRAM, TONNE, POUND, OUNCE]);
