use clap::Parser;
use comfy_table::Table;
use scalars::{Instantiate, Quantity};

use crate::{
    cli::quantity::{QuantityArg, Visitor},
    prelude::*,
    tables::build_units_table,
};

#[derive(Parser)]
pub struct UnitsArgs {
    #[clap(long, short, env = "QUANTITY")]
    quantity: QuantityArg,
}

impl UnitsArgs {
    #[instrument(skip_all, fields(quantity = ?self.quantity))]
    pub fn run(self) -> Result {
        println!("{}", self.quantity.visit(false, Units)?);
        Ok(())
    }
}

struct Units;

impl Visitor for Units {
    type Output = Table;

    fn visit<Q: Quantity, K: Instantiate<Q>>(self) -> Result<Self::Output> {
        Ok(build_units_table::<Q>())
    }
}
