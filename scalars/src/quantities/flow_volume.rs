use crate::Unit;

pub const CUBIC_METER_PER_SECOND: Unit<FlowVolume> = Unit::linear("cubic meter per second", "m³/s", 1.0);
pub const CUBIC_METER_PER_HOUR: Unit<FlowVolume> = Unit::linear("cubic meter per hour", "m³/h", 1.0 / 3600.0);
pub const LITER_PER_SECOND: Unit<FlowVolume> = Unit::linear("liter per second", "L/s", 1e-3);
pub const LITER_PER_MINUTE: Unit<FlowVolume> = Unit::linear("liter per minute", "L/min", 1e-3 / 60.0);
pub const LITER_PER_HOUR: Unit<FlowVolume> = Unit::linear("liter per hour", "L/h", 1e-3 / 3600.0);

quantity!(
    /// Volumetric flow rate.
    FlowVolume,
    name: "FlowVolume",
    units: [CUBIC_METER_PER_SECOND, CUBIC_METER_PER_HOUR, LITER_PER_SECOND, LITER_PER_MINUTE, LITER_PER_HOUR]
);
