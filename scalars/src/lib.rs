#![doc = include_str!("../README.md")]

#[macro_use]
mod macros;

mod derivation;
mod error;
mod kind;
pub mod quantities;
mod quantity;
mod scalar;
mod tolerance;
mod unit;

pub use self::{
    derivation::{Product, Quotient},
    error::{Error, Result},
    kind::{Absolute, Kind, Relative},
    quantity::{AbsoluteQuantity, Quantity},
    scalar::{Abs, Instantiate, Rel, Scalar},
    tolerance::Tolerance,
    unit::Unit,
};
