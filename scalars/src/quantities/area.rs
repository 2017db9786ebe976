use crate::Unit;

pub const SQUARE_METER: Unit<Area> = Unit::linear("square meter", "m²", 1.0);
pub const SQUARE_KILOMETER: Unit<Area> = Unit::linear("square kilometer", "km²", 1e6);
pub const SQUARE_CENTIMETER: Unit<Area> = Unit::linear("square centimeter", "cm²", 1e-4);
pub const SQUARE_MILLIMETER: Unit<Area> = Unit::linear("square millimeter", "mm²", 1e-6);
pub const ARE: Unit<Area> = Unit::linear("are", "a", 100.0);
pub const HECTARE: Unit<Area> = Unit::linear("hectare", "ha", 1e4);
pub const SQUARE_INCH: Unit<Area> = Unit::linear("square inch", "in²", 6.4516e-4);
pub const SQUARE_FOOT: Unit<Area> = Unit::linear("square foot", "ft²", 0.092_903_04);
pub const ACRE: Unit<Area> = Unit::linear("acre", "ac", 4_046.856_422_4);

quantity!(
    Area,
    name: "Area",
    units: [
        SQUARE_METER,
        SQUARE_KILOMETER,
        SQUARE_CENTIMETER,
        SQUARE_MILLIMETER,
        ARE,
        HECTARE,
        SQUARE_INCH,
        SQUARE_FOOT,
        ACRE,
    ]
);
