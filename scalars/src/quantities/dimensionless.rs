use crate::Unit;

pub const UNIT: Unit<Dimensionless> = Unit::linear("unit", "", 1.0);
pub const PERCENT: Unit<Dimensionless> = Unit::linear("percent", "%", 0.01);
pub const PER_MILLE: Unit<Dimensionless> = Unit::linear("per mille", "‰", 0.001);
pub const PARTS_PER_MILLION: Unit<Dimensionless> = Unit::linear("parts per million", "ppm", 1e-6);

quantity!(
    /// Pure number: a ratio, a count, a gain.
    ///
    /// Dividing two scalars of the same quantity yields a dimensionless scalar.
    Dimensionless,
    name: "Dimensionless",
    units: [UNIT, PERCENT, PER_MILLE, PARTS_PER_MILLION]
);
