use crate::Unit;

pub const KILOGRAM_PER_SECOND: Unit<FlowMass> = Unit::linear("kilogram per second", "kg/s", 1.0);
pub const GRAM_PER_SECOND: Unit<FlowMass> = Unit::linear("gram per second", "g/s", 1e-3);
pub const KILOGRAM_PER_HOUR: Unit<FlowMass> = Unit::linear("kilogram per hour", "kg/h", 1.0 / 3600.0);
pub const TONNE_PER_HOUR: Unit<FlowMass> = Unit::linear("tonne per hour", "t/h", 1e3 / 3600.0);

quantity!(
    /// Mass flow rate.
    FlowMass,
    name: "FlowMass",
    units: [KILOGRAM_PER_SECOND, GRAM_PER_SECOND, KILOGRAM_PER_HOUR, TONNE_PER_HOUR]
);
