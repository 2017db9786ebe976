use std::f64::consts::PI;

use crate::Unit;

pub const RADIAN: Unit<Angle> = Unit::linear("radian", "rad", 1.0);
pub const DEGREE: Unit<Angle> = Unit::linear("degree", "°", PI / 180.0);
pub const ARC_MINUTE: Unit<Angle> = Unit::linear("arc minute", "′", PI / 10_800.0);
pub const ARC_SECOND: Unit<Angle> = Unit::linear("arc second", "″", PI / 648_000.0);
pub const GRADIAN: Unit<Angle> = Unit::linear("gradian", "grad", PI / 200.0);
pub const TURN: Unit<Angle> = Unit::linear("turn", "tr", 2.0 * PI);

quantity!(
    Angle,
    name: "Angle",
    units: [RADIAN, DEGREE, ARC_MINUTE, ARC_SECOND, GRADIAN, TURN],
    absolute:
        /// Bearing, measured from a reference direction.
        Direction
);
