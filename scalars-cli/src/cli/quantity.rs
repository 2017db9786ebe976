use scalars::{
    Absolute,
    Instantiate,
    Quantity,
    Relative,
    quantities::{
        acceleration::Acceleration,
        angle::Angle,
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
        temperature::Temperature,
        torque::Torque,
        volume::Volume,
    },
};

use crate::prelude::*;

/// Operation that is generic over the quantity and the scalar kind, picked at runtime.
pub trait Visitor {
    type Output;

    fn visit<Q: Quantity, K: Instantiate<Q>>(self) -> Result<Self::Output>;
}

#[derive(clap::Parser)]
pub struct QuantityArgs {
    #[clap(long, short, env = "QUANTITY")]
    pub quantity: QuantityArg,

    /// Treat the values as positions on a scale (readings) rather than differences.
    #[clap(long)]
    pub absolute: bool,
}

impl QuantityArgs {
    pub fn visit<V: Visitor>(&self, visitor: V) -> Result<V::Output> {
        self.quantity.visit(self.absolute, visitor)
    }
}

macro_rules! visit_arm {
    ($tag:ty, $visitor:ident, $absolute:ident, yes) => {
        if $absolute { $visitor.visit::<$tag, Absolute>() } else { $visitor.visit::<$tag, Relative>() }
    };
    ($tag:ty, $visitor:ident, $absolute:ident, no) => {
        if $absolute {
            bail!("{} has no absolute form", <$tag as Quantity>::NAME)
        } else {
            $visitor.visit::<$tag, Relative>()
        }
    };
}

macro_rules! quantity_arg {
    ($($variant:ident => $tag:ty, absolute: $has_absolute:ident;)+) => {
        #[derive(Copy, Clone, Debug, Eq, PartialEq, clap::ValueEnum)]
        pub enum QuantityArg {
            $($variant,)+
        }

        impl QuantityArg {
            pub fn visit<V: Visitor>(self, absolute: bool, visitor: V) -> Result<V::Output> {
                debug!(quantity = ?self, absolute, "dispatching…");
                match self {
                    $(Self::$variant => visit_arm!($tag, visitor, absolute, $has_absolute),)+
                }
            }
        }
    };
}

quantity_arg! {
    Acceleration => Acceleration, absolute: no;
    Angle => Angle, absolute: yes;
    Area => Area, absolute: no;
    Density => Density, absolute: no;
    Dimensionless => Dimensionless, absolute: no;
    Duration => Duration, absolute: yes;
    ElectricalCurrent => ElectricalCurrent, absolute: no;
    ElectricalPotential => ElectricalPotential, absolute: no;
    Energy => Energy, absolute: no;
    FlowMass => FlowMass, absolute: no;
    FlowVolume => FlowVolume, absolute: no;
    Force => Force, absolute: no;
    Frequency => Frequency, absolute: no;
    Length => Length, absolute: yes;
    Mass => Mass, absolute: no;
    Money => Money, absolute: no;
    MoneyPerEnergy => MoneyPerEnergy, absolute: no;
    MoneyPerTime => MoneyPerTime, absolute: no;
    Power => Power, absolute: no;
    Pressure => Pressure, absolute: no;
    Speed => Speed, absolute: no;
    Temperature => Temperature, absolute: yes;
    Torque => Torque, absolute: no;
    Volume => Volume, absolute: no;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Describe;

    impl Visitor for Describe {
        type Output = (&'static str, &'static str);

        fn visit<Q: Quantity, K: Instantiate<Q>>(self) -> Result<Self::Output> {
            Ok((Q::NAME, K::LABEL))
        }
    }

    #[test]
    fn visit_relative_ok() {
        assert_eq!(QuantityArg::Mass.visit(false, Describe).unwrap(), ("Mass", "Rel"));
    }

    #[test]
    fn visit_absolute_ok() {
        assert_eq!(QuantityArg::Temperature.visit(true, Describe).unwrap(), ("Temperature", "Abs"));
        assert_eq!(QuantityArg::Duration.visit(true, Describe).unwrap(), ("Duration", "Abs"));
    }

    #[test]
    fn visit_absolute_unsupported() {
        let error = QuantityArg::Mass.visit(true, Describe).unwrap_err();
        assert_eq!(error.to_string(), "Mass has no absolute form");
    }

    #[test]
    fn value_enum_names_ok() {
        use clap::ValueEnum;

        assert_eq!(QuantityArg::from_str("flow-volume", false).unwrap(), QuantityArg::FlowVolume);
        assert_eq!(QuantityArg::from_str("Temperature", true).unwrap(), QuantityArg::Temperature);
    }
}
