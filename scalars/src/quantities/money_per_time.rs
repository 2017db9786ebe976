use crate::Unit;

pub const EURO_PER_SECOND: Unit<MoneyPerTime> = Unit::linear("euro per second", "€/s", 1.0);
pub const EURO_PER_HOUR: Unit<MoneyPerTime> = Unit::linear("euro per hour", "€/h", 1.0 / 3600.0);
pub const EURO_PER_DAY: Unit<MoneyPerTime> = Unit::linear("euro per day", "€/d", 1.0 / 86400.0);

quantity!(MoneyPerTime, name: "MoneyPerTime", units: [EURO_PER_SECOND, EURO_PER_HOUR, EURO_PER_DAY]);
