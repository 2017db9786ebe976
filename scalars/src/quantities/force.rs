use crate::Unit;

pub const NEWTON: Unit<Force> = Unit::linear("newton", "N", 1.0);
pub const KILONEWTON: Unit<Force> = Unit::linear("kilonewton", "kN", 1e3);
pub const DYNE: Unit<Force> = Unit::linear("dyne", "dyn", 1e-5);
pub const KILOGRAM_FORCE: Unit<Force> = Unit::linear("kilogram-force", "kgf", 9.806_65);
pub const POUND_FORCE: Unit<Force> = Unit::linear("pound-force", "lbf", 4.448_221_615_260_5);

quantity!(Force, name: "Force", units: [NEWTON, KILONEWTON, DYNE, KILOGRAM_FORCE, POUND_FORCE]);
