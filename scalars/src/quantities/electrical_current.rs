use crate::Unit;

pub const AMPERE: Unit<ElectricalCurrent> = Unit::linear("ampere", "A", 1.0);
pub const MILLIAMPERE: Unit<ElectricalCurrent> = Unit::linear("milliampere", "mA", 1e-3);
pub const MICROAMPERE: Unit<ElectricalCurrent> = Unit::linear("microampere", "µA", 1e-6);
pub const KILOAMPERE: Unit<ElectricalCurrent> = Unit::linear("kiloampere", "kA", 1e3);

quantity!(
    ElectricalCurrent,
    name: "ElectricalCurrent",
    units: [AMPERE, MILLIAMPERE, MICROAMPERE, KILOAMPERE]
);
