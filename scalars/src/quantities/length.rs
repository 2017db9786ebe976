use crate::Unit;

pub const METER: Unit<Length> = Unit::linear("meter", "m", 1.0);
pub const KILOMETER: Unit<Length> = Unit::linear("kilometer", "km", 1e3);
pub const DECIMETER: Unit<Length> = Unit::linear("decimeter", "dm", 0.1);
pub const CENTIMETER: Unit<Length> = Unit::linear("centimeter", "cm", 0.01);
pub const MILLIMETER: Unit<Length> = Unit::linear("millimeter", "mm", 1e-3);
pub const MICROMETER: Unit<Length> = Unit::linear("micrometer", "µm", 1e-6);
pub const NANOMETER: Unit<Length> = Unit::linear("nanometer", "nm", 1e-9);
pub const INCH: Unit<Length> = Unit::linear("inch", "in", 0.0254);
pub const FOOT: Unit<Length> = Unit::linear("foot", "ft", 0.3048);
pub const YARD: Unit<Length> = Unit::linear("yard", "yd", 0.9144);
pub const MILE: Unit<Length> = Unit::linear("mile", "mi", 1609.344);
pub const NAUTICAL_MILE: Unit<Length> = Unit::linear("nautical mile", "NM", 1852.0);

quantity!(
    Length,
    name: "Length",
    units: [
        METER,
        KILOMETER,
        DECIMETER,
        CENTIMETER,
        MILLIMETER,
        MICROMETER,
        NANOMETER,
        INCH,
        FOOT,
        YARD,
        MILE,
        NAUTICAL_MILE,
    ],
    absolute:
        /// Location along a line, relative to its origin.
        Position
);
