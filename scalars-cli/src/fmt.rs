use std::fmt::{Display, Formatter};

use scalars::Scalar;

/// Scalar with an optional fixed number of decimals.
pub struct FormattedScalar<Q, K> {
    pub scalar: Scalar<Q, K>,
    pub precision: Option<usize>,
}

impl<Q, K> Display for FormattedScalar<Q, K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.precision {
            Some(precision) => write!(f, "{:.*}", precision, self.scalar),
            None => write!(f, "{}", self.scalar),
        }
    }
}
