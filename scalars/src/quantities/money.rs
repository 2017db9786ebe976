use crate::Unit;

pub const EURO: Unit<Money> = Unit::linear("euro", "€", 1.0);
pub const CENT: Unit<Money> = Unit::linear("cent", "ct", 0.01);

/// [Mill][1], one-thousandth of the base unit.
///
/// [1]: https://en.wikipedia.org/wiki/Mill_(currency)
pub const MILL: Unit<Money> = Unit::linear("mill", "₥", 1e-3);

quantity!(
    /// Amount of money in a single currency.
    ///
    /// There is no exchange: the subunits are fixed fractions of the euro.
    Money,
    name: "Money",
    units: [EURO, CENT, MILL]
);
