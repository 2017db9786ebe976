use crate::Unit;

pub const METER_PER_SECOND: Unit<Speed> = Unit::linear("meter per second", "m/s", 1.0);
pub const KILOMETER_PER_HOUR: Unit<Speed> = Unit::linear("kilometer per hour", "km/h", 1.0 / 3.6);
pub const MILE_PER_HOUR: Unit<Speed> = Unit::linear("mile per hour", "mph", 0.447_04);
pub const KNOT: Unit<Speed> = Unit::linear("knot", "kn", 1852.0 / 3600.0);
pub const FOOT_PER_SECOND: Unit<Speed> = Unit::linear("foot per second", "ft/s", 0.3048);

quantity!(
    Speed,
    name: "Speed",
    units: [METER_PER_SECOND, KILOMETER_PER_HOUR, MILE_PER_HOUR, KNOT, FOOT_PER_SECOND]
);
