use crate::Unit;

pub const METER_PER_SECOND_SQUARED: Unit<Acceleration> = Unit::linear("meter per second squared", "m/s²", 1.0);
pub const KILOMETER_PER_HOUR_PER_SECOND: Unit<Acceleration> =
    Unit::linear("kilometer per hour per second", "km/h/s", 1.0 / 3.6);
pub const GAL: Unit<Acceleration> = Unit::linear("gal", "Gal", 0.01);

/// Standard acceleration of gravity.
pub const STANDARD_GRAVITY: Unit<Acceleration> = Unit::linear("standard gravity", "gn", 9.806_65);

quantity!(
    Acceleration,
    name: "Acceleration",
    units: [METER_PER_SECOND_SQUARED, KILOMETER_PER_HOUR_PER_SECOND, GAL, STANDARD_GRAVITY]
);
