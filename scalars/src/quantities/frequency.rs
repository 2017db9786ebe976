use crate::Unit;

pub const HERTZ: Unit<Frequency> = Unit::linear("hertz", "Hz", 1.0);
pub const KILOHERTZ: Unit<Frequency> = Unit::linear("kilohertz", "kHz", 1e3);
pub const MEGAHERTZ: Unit<Frequency> = Unit::linear("megahertz", "MHz", 1e6);
pub const GIGAHERTZ: Unit<Frequency> = Unit::linear("gigahertz", "GHz", 1e9);
pub const PER_MINUTE: Unit<Frequency> = Unit::linear("per minute", "/min", 1.0 / 60.0);
pub const PER_HOUR: Unit<Frequency> = Unit::linear("per hour", "/h", 1.0 / 3600.0);

quantity!(
    Frequency,
    name: "Frequency",
    units: [HERTZ, KILOHERTZ, MEGAHERTZ, GIGAHERTZ, PER_MINUTE, PER_HOUR]
);
