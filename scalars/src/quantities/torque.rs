use crate::Unit;

pub const NEWTON_METER: Unit<Torque> = Unit::linear("newton meter", "N·m", 1.0);
pub const KILONEWTON_METER: Unit<Torque> = Unit::linear("kilonewton meter", "kN·m", 1e3);
pub const POUND_FOOT: Unit<Torque> = Unit::linear("pound-foot", "lbf·ft", 1.355_817_948_331_400_4);

quantity!(
    /// Moment of force.
    ///
    /// Dimensionally the same as energy, kept apart so that force times length does not turn
    /// into work by accident.
    Torque,
    name: "Torque",
    units: [NEWTON_METER, KILONEWTON_METER, POUND_FOOT]
);
