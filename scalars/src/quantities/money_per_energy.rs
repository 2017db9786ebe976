use crate::Unit;

pub const EURO_PER_JOULE: Unit<MoneyPerEnergy> = Unit::linear("euro per joule", "€/J", 1.0);
pub const EURO_PER_KILOWATT_HOUR: Unit<MoneyPerEnergy> = Unit::linear("euro per kilowatt-hour", "€/kWh", 1.0 / 3.6e6);
pub const EURO_PER_MEGAWATT_HOUR: Unit<MoneyPerEnergy> = Unit::linear("euro per megawatt-hour", "€/MWh", 1.0 / 3.6e9);
pub const CENT_PER_KILOWATT_HOUR: Unit<MoneyPerEnergy> = Unit::linear("cent per kilowatt-hour", "ct/kWh", 0.01 / 3.6e6);

quantity!(
    /// Energy price.
    MoneyPerEnergy,
    name: "MoneyPerEnergy",
    units: [EURO_PER_JOULE, EURO_PER_KILOWATT_HOUR, EURO_PER_MEGAWATT_HOUR, CENT_PER_KILOWATT_HOUR]
);
