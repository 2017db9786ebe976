//! Cross-quantity multiplication and division.
//!
//! Only the combinations declared here (or by a downstream crate for its own quantities)
//! compile. The result is computed on the SI values and tagged with the standard unit of the
//! resulting quantity.

use std::ops::{Div, Mul};

use crate::{
    Quantity,
    Rel,
    quantities::{
        acceleration::Acceleration,
        area::Area,
        density::Density,
        dimensionless::Dimensionless,
        duration::Duration,
        electrical_current::ElectricalCurrent,
        electrical_potential::ElectricalPotential,
        energy::Energy,
        flow_mass::FlowMass,
        flow_volume::FlowVolume,
        force::Force,
        frequency::Frequency,
        length::Length,
        mass::Mass,
        money::Money,
        money_per_energy::MoneyPerEnergy,
        money_per_time::MoneyPerTime,
        power::Power,
        pressure::Pressure,
        speed::Speed,
        torque::Torque,
        volume::Volume,
    },
};

/// `Self × Rhs = Output`.
pub trait Product<Rhs: Quantity>: Quantity {
    type Output: Quantity;
}

/// `Self ÷ Rhs = Output`.
pub trait Quotient<Rhs: Quantity>: Quantity {
    type Output: Quantity;
}

/// Ratio of two scalars of the same quantity.
impl<Q: Quantity> Quotient<Q> for Q {
    type Output = Dimensionless;
}

/// Scaling by a ratio keeps the quantity.
impl<Q: Quantity> Product<Q> for Dimensionless {
    type Output = Q;
}

impl<Q: Product<R>, R: Quantity> Mul<Rel<R>> for Rel<Q> {
    type Output = Rel<Q::Output>;

    fn mul(self, rhs: Rel<R>) -> Self::Output {
        Rel::from_si(self.si() * rhs.si())
    }
}

impl<Q: Quotient<R>, R: Quantity> Div<Rel<R>> for Rel<Q> {
    type Output = Rel<Q::Output>;

    fn div(self, rhs: Rel<R>) -> Self::Output {
        Rel::from_si(self.si() / rhs.si())
    }
}

product! {
    Length * Length => Area;
    Length * Area => Volume;
    Area * Length => Volume;

    Density * Volume => Mass;
    Volume * Density => Mass;

    Speed * Duration => Length;
    Duration * Speed => Length;
    Acceleration * Duration => Speed;
    Duration * Acceleration => Speed;
    Frequency * Length => Speed;
    Length * Frequency => Speed;
    Frequency * Duration => Dimensionless;
    Duration * Frequency => Dimensionless;

    Mass * Acceleration => Force;
    Acceleration * Mass => Force;
    Force * Length => Torque;
    Length * Force => Torque;
    Pressure * Area => Force;
    Area * Pressure => Force;
    Pressure * Volume => Energy;
    Volume * Pressure => Energy;

    Power * Duration => Energy;
    Duration * Power => Energy;
    Force * Speed => Power;
    Speed * Force => Power;
    ElectricalCurrent * ElectricalPotential => Power;
    ElectricalPotential * ElectricalCurrent => Power;

    FlowVolume * Duration => Volume;
    Duration * FlowVolume => Volume;
    FlowMass * Duration => Mass;
    Duration * FlowMass => Mass;
    FlowVolume * Density => FlowMass;
    Density * FlowVolume => FlowMass;

    MoneyPerEnergy * Energy => Money;
    Energy * MoneyPerEnergy => Money;
    MoneyPerTime * Duration => Money;
    Duration * MoneyPerTime => Money;
    MoneyPerEnergy * Power => MoneyPerTime;
    Power * MoneyPerEnergy => MoneyPerTime;
}

quotient! {
    Area / Length => Length;
    Volume / Length => Area;
    Volume / Area => Length;

    Mass / Volume => Density;
    Mass / Density => Volume;

    Length / Duration => Speed;
    Length / Speed => Duration;
    Speed / Duration => Acceleration;
    Speed / Acceleration => Duration;
    Speed / Length => Frequency;
    Speed / Frequency => Length;
    Dimensionless / Duration => Frequency;
    Dimensionless / Frequency => Duration;

    Force / Mass => Acceleration;
    Force / Acceleration => Mass;
    Torque / Length => Force;
    Torque / Force => Length;
    Force / Area => Pressure;
    Force / Pressure => Area;
    Energy / Volume => Pressure;
    Energy / Pressure => Volume;

    Energy / Duration => Power;
    Energy / Power => Duration;
    Power / Speed => Force;
    Power / Force => Speed;
    Power / ElectricalCurrent => ElectricalPotential;
    Power / ElectricalPotential => ElectricalCurrent;

    Volume / Duration => FlowVolume;
    Volume / FlowVolume => Duration;
    Mass / Duration => FlowMass;
    Mass / FlowMass => Duration;
    FlowMass / Density => FlowVolume;
    FlowMass / FlowVolume => Density;

    Money / Energy => MoneyPerEnergy;
    Money / MoneyPerEnergy => Energy;
    Money / Duration => MoneyPerTime;
    Money / MoneyPerTime => Duration;
    MoneyPerTime / Power => MoneyPerEnergy;
    MoneyPerTime / MoneyPerEnergy => Power;
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::quantities::{
        density::KILOGRAM_PER_CUBIC_METER,
        dimensionless::UNIT,
        duration::{HOUR, MINUTE},
        energy::KILOWATT_HOUR,
        force::NEWTON,
        length::{CENTIMETER, KILOMETER, METER},
        mass::KILOGRAM,
        money::EURO,
        money_per_energy::EURO_PER_KILOWATT_HOUR,
        power::KILOWATT,
        speed::KILOMETER_PER_HOUR,
        torque::NEWTON_METER,
        volume::CUBIC_METER,
    };

    #[test]
    fn density_times_volume_is_mass() {
        let mass = Rel::<Density>::new(1000.0, KILOGRAM_PER_CUBIC_METER).multiply_by(Rel::<Volume>::new(2.0, CUBIC_METER));
        assert_eq!(mass, Rel::<Mass>::new(2000.0, KILOGRAM));
        assert_eq!(mass.unit(), KILOGRAM);
    }

    #[test]
    fn length_over_duration_is_speed() {
        let speed: Rel<Speed> = Rel::<Length>::new(90.0, KILOMETER) / Rel::<Duration>::new(90.0, MINUTE);
        assert_abs_diff_eq!(speed.in_unit(KILOMETER_PER_HOUR), 60.0, epsilon = 1e-4);
    }

    #[test]
    fn force_times_length_is_torque() {
        let torque = Rel::<Force>::new(10.0, NEWTON) * Rel::<Length>::new(50.0, CENTIMETER);
        assert_abs_diff_eq!(torque.in_unit(NEWTON_METER), 5.0, epsilon = 1e-6);
    }

    #[test]
    fn power_times_duration_is_energy() {
        let energy = Rel::<Power>::new(2.0, KILOWATT) * Rel::<Duration>::new(3.0, HOUR);
        assert_abs_diff_eq!(energy.in_unit(KILOWATT_HOUR), 6.0, epsilon = 1e-6);
    }

    #[test]
    fn money_is_an_ordinary_quantity() {
        let price = Rel::<MoneyPerEnergy>::new(0.25, EURO_PER_KILOWATT_HOUR);
        let cost = price * Rel::<Energy>::new(4.0, KILOWATT_HOUR);
        assert_abs_diff_eq!(cost.in_unit(EURO), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn same_quantity_is_dimensionless() {
        let ratio: Rel<Dimensionless> = Rel::<Length>::new(1.0, KILOMETER).divide_by(Rel::<Length>::new(250.0, METER));
        assert_eq!(ratio.unit(), UNIT);
        assert_abs_diff_eq!(ratio.magnitude(), 4.0);
    }

    #[test]
    fn dimensionless_keeps_quantity() {
        let half = Rel::<Dimensionless>::new(0.5, UNIT);
        let length: Rel<Length> = half * Rel::<Length>::new(3.0, KILOMETER);
        assert_eq!(length.unit(), METER);
        assert_abs_diff_eq!(length.magnitude(), 1500.0);
    }

    #[test]
    fn product_si_agrees_with_magnitude() {
        let area = Rel::<Length>::new(0.1, METER) * Rel::<Length>::new(0.3, KILOMETER);
        let expected = f64::from(area.magnitude()) * area.unit().scale();
        assert_eq!(area.si().to_bits(), expected.to_bits());
        assert_eq!(area, Rel::new(area.magnitude(), area.unit()));
    }

    #[test]
    fn division_by_zero_is_infinite() {
        let speed = Rel::<Length>::new(1.0, METER) / Rel::<Duration>::ZERO;
        assert!(speed.si().is_infinite());
    }
}
