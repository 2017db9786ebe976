use std::cmp::Ordering;

use clap::Parser;
use scalars::{Instantiate, Quantity, Scalar, Tolerance};

use crate::{
    cli::quantity::{QuantityArgs, Visitor},
    prelude::*,
    tables::build_comparison_table,
};

#[derive(Parser)]
pub struct CompareArgs {
    #[clap(flatten)]
    quantity: QuantityArgs,

    left: String,

    right: String,
}

impl CompareArgs {
    #[instrument(skip_all, fields(quantity = ?self.quantity.quantity))]
    pub fn run(self, tolerance: Tolerance) -> Result {
        let comparison =
            self.quantity.visit(Compare { left: &self.left, right: &self.right, tolerance })?;
        println!("{}", build_comparison_table(&comparison));
        Ok(())
    }
}

/// Outcome of comparing two scalars of the same quantity and kind.
#[derive(Debug)]
pub struct Comparison {
    pub left: String,
    pub right: String,

    /// `right - left`, in the base unit.
    pub si_difference: f64,

    pub ordering: Ordering,
    pub exactly_equal: bool,
    pub approximately_equal: bool,
}

struct Compare<'a> {
    left: &'a str,
    right: &'a str,
    tolerance: Tolerance,
}

impl Visitor for Compare<'_> {
    type Output = Comparison;

    fn visit<Q: Quantity, K: Instantiate<Q>>(self) -> Result<Self::Output> {
        let left: Scalar<Q, K> = self.left.parse().with_context(|| format!("failed to parse `{}`", self.left))?;
        let right: Scalar<Q, K> = self.right.parse().with_context(|| format!("failed to parse `{}`", self.right))?;
        Ok(Comparison {
            left: left.to_string(),
            right: right.to_string(),
            si_difference: right.si() - left.si(),
            ordering: left.cmp(&right),
            exactly_equal: left == right,
            approximately_equal: self.tolerance.equal(&left, &right),
        })
    }
}
