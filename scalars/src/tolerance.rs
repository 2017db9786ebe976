use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};

use crate::{Kind, Quantity, Scalar};

/// Approximate equality of scalars, on their SI values.
///
/// `==` on scalars is exact. Two values that are physically equal but arrived through different
/// unit conversions may differ in the last bits, compare them with a tolerance instead.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, derive_more::Constructor)]
#[serde(default)]
pub struct Tolerance {
    /// Largest absolute SI difference still considered equal.
    pub absolute: f64,

    /// Largest difference relative to the larger of the two SI magnitudes.
    pub relative: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        // A few `f32` ULPs.
        Self { absolute: 1e-9, relative: 1e-6 }
    }
}

impl Tolerance {
    #[must_use]
    pub fn equal<Q: Quantity, K: Kind>(&self, lhs: &Scalar<Q, K>, rhs: &Scalar<Q, K>) -> bool {
        lhs.relative_eq(rhs, self.absolute, self.relative)
    }
}

impl<Q: Quantity, K: Kind> AbsDiffEq for Scalar<Q, K> {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        Tolerance::default().absolute
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.si().abs_diff_eq(&other.si(), epsilon)
    }
}

impl<Q: Quantity, K: Kind> RelativeEq for Scalar<Q, K> {
    fn default_max_relative() -> Self::Epsilon {
        Tolerance::default().relative
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.si().relative_eq(&other.si(), epsilon, max_relative)
    }
}
