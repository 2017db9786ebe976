use crate::Unit;

pub const JOULE: Unit<Energy> = Unit::linear("joule", "J", 1.0);
pub const KILOJOULE: Unit<Energy> = Unit::linear("kilojoule", "kJ", 1e3);
pub const MEGAJOULE: Unit<Energy> = Unit::linear("megajoule", "MJ", 1e6);
pub const WATT_HOUR: Unit<Energy> = Unit::linear("watt-hour", "Wh", 3600.0);
pub const KILOWATT_HOUR: Unit<Energy> = Unit::linear("kilowatt-hour", "kWh", 3.6e6);
pub const MEGAWATT_HOUR: Unit<Energy> = Unit::linear("megawatt-hour", "MWh", 3.6e9);
pub const CALORIE: Unit<Energy> = Unit::linear("calorie", "cal", 4.184);
pub const KILOCALORIE: Unit<Energy> = Unit::linear("kilocalorie", "kcal", 4184.0);
pub const ELECTRONVOLT: Unit<Energy> = Unit::linear("electronvolt", "eV", 1.602_176_634e-19);

/// International table British thermal unit.
pub const BTU: Unit<Energy> = Unit::linear("british thermal unit", "BTU", 1_055.055_852_62);

quantity!(
    Energy,
    name: "Energy",
    units: [
        JOULE,
        KILOJOULE,
        MEGAJOULE,
        WATT_HOUR,
        KILOWATT_HOUR,
        MEGAWATT_HOUR,
        CALORIE,
        KILOCALORIE,
        ELECTRONVOLT,
        BTU,
    ]
);
