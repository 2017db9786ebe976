use crate::Unit;

pub const PASCAL: Unit<Pressure> = Unit::linear("pascal", "Pa", 1.0);
pub const HECTOPASCAL: Unit<Pressure> = Unit::linear("hectopascal", "hPa", 100.0);
pub const KILOPASCAL: Unit<Pressure> = Unit::linear("kilopascal", "kPa", 1e3);
pub const MEGAPASCAL: Unit<Pressure> = Unit::linear("megapascal", "MPa", 1e6);
pub const BAR: Unit<Pressure> = Unit::linear("bar", "bar", 1e5);
pub const MILLIBAR: Unit<Pressure> = Unit::linear("millibar", "mbar", 100.0);
pub const ATMOSPHERE: Unit<Pressure> = Unit::linear("atmosphere", "atm", 101_325.0);
pub const MILLIMETER_OF_MERCURY: Unit<Pressure> = Unit::linear("millimeter of mercury", "mmHg", 133.322_387_415);
pub const POUND_PER_SQUARE_INCH: Unit<Pressure> = Unit::linear("pound per square inch", "psi", 6_894.757_293_168);

quantity!(
    Pressure,
    name: "Pressure",
    units: [
        PASCAL,
        HECTOPASCAL,
        KILOPASCAL,
        MEGAPASCAL,
        BAR,
        MILLIBAR,
        ATMOSPHERE,
        MILLIMETER_OF_MERCURY,
        POUND_PER_SQUARE_INCH,
    ]
);
