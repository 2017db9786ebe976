//! Quantity catalog: one module per quantity with its tag, its units and, where it exists, the
//! alias of its absolute form.

pub mod acceleration;
pub mod angle;
pub mod area;
pub mod density;
pub mod dimensionless;
pub mod duration;
pub mod electrical_current;
pub mod electrical_potential;
pub mod energy;
pub mod flow_mass;
pub mod flow_volume;
pub mod force;
pub mod frequency;
pub mod length;
pub mod mass;
pub mod money;
pub mod money_per_energy;
pub mod money_per_time;
pub mod power;
pub mod pressure;
pub mod speed;
pub mod temperature;
pub mod torque;
pub mod volume;
