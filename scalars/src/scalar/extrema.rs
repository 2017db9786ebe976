use crate::{Kind, Quantity, Scalar};

impl<Q: Quantity, K: Kind> Scalar<Q, K> {
    /// Linear interpolation between `zero` (at `ratio = 0`) and `one` (at `ratio = 1`),
    /// expressed in the unit of `zero`.
    ///
    /// The ratio is not clamped: outside `[0, 1]`, the line is extrapolated.
    pub fn interpolate(zero: Self, one: Self, ratio: f32) -> Self {
        let magnitude = zero.magnitude.mul_add(1.0 - ratio, one.in_unit(zero.unit) * ratio);
        Self::instantiate(magnitude, zero.unit)
    }

    /// Greater of the two, `self` on a tie.
    pub fn max(self, other: Self) -> Self {
        if other > self { other } else { self }
    }

    /// Lesser of the two, `self` on a tie.
    pub fn min(self, other: Self) -> Self {
        if other < self { other } else { self }
    }

    /// Restrict to `[min, max]`, with the same tie-break as [`Self::max`] and [`Self::min`].
    ///
    /// Unlike [`Ord::clamp`], this does not panic when `min > max`: `max` wins.
    pub fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }

    /// Greatest of the scalars, the earliest one on a tie. [`None`] when empty.
    #[must_use]
    pub fn max_of(scalars: impl IntoIterator<Item = Self>) -> Option<Self> {
        scalars.into_iter().reduce(Self::max)
    }

    /// Least of the scalars, the earliest one on a tie. [`None`] when empty.
    #[must_use]
    pub fn min_of(scalars: impl IntoIterator<Item = Self>) -> Option<Self> {
        scalars.into_iter().reduce(Self::min)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crate::{
        Rel,
        quantities::{
            length::{KILOMETER, Length, METER, MILLIMETER},
            temperature::{AbsoluteTemperature, DEGREE_CELSIUS, KELVIN},
        },
    };

    #[test]
    fn interpolate_boundaries() {
        let zero = Rel::<Length>::new(0.0, METER);
        let one = Rel::<Length>::new(10.0, METER);
        assert_eq!(Rel::interpolate(zero, one, 0.0), zero);
        assert_eq!(Rel::interpolate(zero, one, 1.0), one);
        assert_eq!(Rel::interpolate(zero, one, 0.5), Rel::<Length>::new(5.0, METER));
    }

    #[test]
    fn interpolate_in_unit_of_zero() {
        let middle = Rel::interpolate(Rel::<Length>::new(1.0, KILOMETER), Rel::<Length>::new(3000.0, METER), 0.5);
        assert_eq!(middle.unit(), KILOMETER);
        assert_abs_diff_eq!(middle.magnitude(), 2.0);
    }

    #[test]
    fn interpolate_extrapolates() {
        let zero = Rel::<Length>::new(0.0, METER);
        let one = Rel::<Length>::new(10.0, METER);
        assert_abs_diff_eq!(Rel::interpolate(zero, one, 1.5).magnitude(), 15.0);
        assert_abs_diff_eq!(Rel::interpolate(zero, one, -0.5).magnitude(), -5.0);
    }

    #[test]
    fn interpolate_absolute() {
        let morning = AbsoluteTemperature::new(10.0, DEGREE_CELSIUS);
        let noon = AbsoluteTemperature::new(303.15, KELVIN);
        let midway = AbsoluteTemperature::interpolate(morning, noon, 0.25);
        assert_eq!(midway.unit(), DEGREE_CELSIUS);
        assert_abs_diff_eq!(midway.magnitude(), 15.0, epsilon = 1e-4);
    }

    #[test]
    fn max_tie_keeps_first() {
        let meters = Rel::<Length>::new(5.0, METER);
        let millimeters = Rel::<Length>::new(5000.0, MILLIMETER);
        assert_eq!(meters.max(millimeters).unit(), METER);
        assert_eq!(millimeters.max(meters).unit(), MILLIMETER);
        assert_eq!(meters.min(millimeters).unit(), METER);
    }

    #[test]
    fn max_min_ok() {
        let short = Rel::<Length>::new(999.0, METER);
        let long = Rel::<Length>::new(1.0, KILOMETER);
        assert_eq!(short.max(long), long);
        assert_eq!(long.max(short), long);
        assert_eq!(short.min(long), short);
        assert_eq!(long.min(short), short);
    }

    #[test]
    fn clamp_ok() {
        let low = Rel::<Length>::new(2.0, METER);
        let high = Rel::<Length>::new(3.0, METER);
        assert_eq!(Rel::<Length>::new(1.0, METER).clamp(low, high), low);
        assert_eq!(Rel::<Length>::new(4.0, METER).clamp(low, high), high);
        assert_eq!(Rel::<Length>::new(2500.0, MILLIMETER).clamp(low, high).unit(), MILLIMETER);
    }

    #[test]
    fn max_of_ok() {
        let lengths = [
            Rel::<Length>::new(1.0, METER),
            Rel::<Length>::new(5.0, METER),
            Rel::<Length>::new(5000.0, MILLIMETER),
            Rel::<Length>::new(2.0, METER),
        ];
        let longest = Rel::max_of(lengths).unwrap();
        assert_eq!(longest.unit(), METER);
        assert_abs_diff_eq!(longest.magnitude(), 5.0);
        assert_abs_diff_eq!(Rel::min_of(lengths).unwrap().magnitude(), 1.0);
    }

    #[test]
    fn max_of_empty() {
        assert_eq!(Rel::<Length>::max_of([]), None);
        assert_eq!(Rel::<Length>::min_of(Vec::new()), None);
    }
}
