use crate::Unit;

pub const VOLT: Unit<ElectricalPotential> = Unit::linear("volt", "V", 1.0);
pub const MILLIVOLT: Unit<ElectricalPotential> = Unit::linear("millivolt", "mV", 1e-3);
pub const KILOVOLT: Unit<ElectricalPotential> = Unit::linear("kilovolt", "kV", 1e3);
pub const MEGAVOLT: Unit<ElectricalPotential> = Unit::linear("megavolt", "MV", 1e6);

quantity!(
    ElectricalPotential,
    name: "ElectricalPotential",
    units: [VOLT, MILLIVOLT, KILOVOLT, MEGAVOLT]
);
