use crate::Unit;

pub const WATT: Unit<Power> = Unit::linear("watt", "W", 1.0);
pub const MILLIWATT: Unit<Power> = Unit::linear("milliwatt", "mW", 1e-3);
pub const KILOWATT: Unit<Power> = Unit::linear("kilowatt", "kW", 1e3);
pub const MEGAWATT: Unit<Power> = Unit::linear("megawatt", "MW", 1e6);
pub const GIGAWATT: Unit<Power> = Unit::linear("gigawatt", "GW", 1e9);

/// Mechanical horsepower.
pub const HORSEPOWER: Unit<Power> = Unit::linear("horsepower", "hp", 745.699_871_582_270_2);

quantity!(Power, name: "Power", units: [WATT, MILLIWATT, KILOWATT, MEGAWATT, GIGAWATT, HORSEPOWER]);
