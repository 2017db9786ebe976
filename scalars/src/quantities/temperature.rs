use crate::Unit;

pub const KELVIN: Unit<Temperature> = Unit::linear("kelvin", "K", 1.0);
pub const DEGREE_CELSIUS: Unit<Temperature> = Unit::affine("degree Celsius", "°C", 1.0, 273.15);
pub const DEGREE_FAHRENHEIT: Unit<Temperature> =
    Unit::affine("degree Fahrenheit", "°F", 5.0 / 9.0, 459.67 * 5.0 / 9.0);
pub const DEGREE_RANKINE: Unit<Temperature> = Unit::linear("degree Rankine", "°R", 5.0 / 9.0);

quantity!(
    /// Temperature.
    ///
    /// The relative form is a temperature difference, where `1 °C` is `1 K`. The absolute form
    /// is a reading, where `0 °C` is `273.15 K`.
    Temperature,
    name: "Temperature",
    units: [KELVIN, DEGREE_CELSIUS, DEGREE_FAHRENHEIT, DEGREE_RANKINE],
    absolute: AbsoluteTemperature
);
