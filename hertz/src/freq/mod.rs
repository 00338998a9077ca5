mod fmt;
mod ops;

use core::{hash::Hash, marker::PhantomData};

use crate::{
    cast::frequency_cast,
    common::CommonRep,
    period::{is_valid, Period, Quotient, Unity},
    rep::{convert, is_floating, KeepsFraction, Rep, RepValues},
    FrequencyType,
};

pub use fmt::UnitSuffix;

/// A temporal frequency.
///
/// A frequency is a count of ticks of type `R` and a tick period `P`, the compile-time rational
/// number of hertz represented by one tick. Only the count is stored; `P` is part of the type and
/// is used when frequencies of different types meet.
///
/// ```
/// use hertz::{si::*, Hertz};
///
/// let f = 1250 * mHz;
/// assert_eq!(1250, f.count());
/// assert!(f == 1.25 * Hz);
/// assert!(f > 1 * Hz);
///
/// let g: Hertz = f.cast();
/// assert_eq!(1, g.count());
///
/// let mut total = Hertz::zero();
/// total += (1 * Hz) + (2 * Hz);
/// assert_eq!(3 * Hz, total);
/// ```
///
/// A count with a fractional part cannot be moved into integral storage implicitly,
///
/// ```compile_fail
/// use hertz::Frequency;
///
/// let _ = Frequency::<i32>::from_count(1.5f32);
/// ```
///
/// a lossy conversion between periods must be requested with [`frequency_cast`],
///
/// ```compile_fail
/// use hertz::{si::*, Hertz};
///
/// let _ = Hertz::from_frequency(1 * mHz);
/// ```
///
/// compound assignment keeps the period of the left operand,
///
/// ```compile_fail
/// use hertz::si::*;
///
/// let mut f = 1 * Hz;
/// f += 1 * mHz;
/// ```
///
/// the tick period must be positive,
///
/// ```compile_fail
/// use hertz::{Frequency, Ratio};
///
/// let _ = Frequency::<i32, Ratio<0>>::new(1);
/// ```
///
/// and the tick count cannot be a frequency.
///
/// ```compile_fail
/// use hertz::Frequency;
///
/// let _ = Frequency::<Frequency<i32>>::default();
/// ```
#[repr(transparent)]
pub struct Frequency<R, P = Unity> {
    count: R,
    period: PhantomData<P>,
}

impl<R: Rep, P: Period> Frequency<R, P> {
    /// Creates a frequency of `count` ticks.
    #[must_use]
    pub const fn new(count: R) -> Self {
        const { assert!(is_valid::<P>(), "the tick period must be a positive ratio") };
        Self {
            count,
            period: PhantomData,
        }
    }

    /// Creates a frequency of `count` ticks of another storage type.
    ///
    /// A floating point count can only be stored in floating point storage. Integral counts are
    /// narrowed as if by `as`.
    #[must_use]
    pub fn from_count<R2: Rep>(count: R2) -> Self
    where
        R2::Kind: KeepsFraction<R::Kind>,
    {
        Self::new(convert(count))
    }

    /// Converts `f` into this frequency type without loss of precision.
    ///
    /// Allowed when `R` is floating point, or when `P2 / P` is a whole number and `R2` is
    /// integral. Any other combination fails to compile; use [`frequency_cast`] instead.
    #[must_use]
    pub fn from_frequency<R2: Rep, P2: Period>(f: Frequency<R2, P2>) -> Self {
        const {
            assert!(
                is_floating::<R>()
                    || (<Quotient<P2, P> as Period>::DEN == 1 && !is_floating::<R2>()),
                "conversion truncates, use frequency_cast"
            )
        };
        frequency_cast(f)
    }

    /// Returns the number of ticks.
    #[must_use]
    pub const fn count(&self) -> R {
        self.count
    }

    /// The zero-length frequency, as given by [`Rep::Values`].
    #[must_use]
    pub fn zero() -> Self {
        Self::zero_with::<R::Values>()
    }

    /// The smallest possible frequency, as given by [`Rep::Values`].
    #[must_use]
    pub fn min() -> Self {
        Self::min_with::<R::Values>()
    }

    /// The largest possible frequency, as given by [`Rep::Values`].
    #[must_use]
    pub fn max() -> Self {
        Self::max_with::<R::Values>()
    }

    /// The zero-length frequency, as given by `V`.
    #[must_use]
    pub fn zero_with<V: RepValues<R>>() -> Self {
        Self::new(V::zero())
    }

    /// The smallest possible frequency, as given by `V`.
    #[must_use]
    pub fn min_with<V: RepValues<R>>() -> Self {
        Self::new(V::min())
    }

    /// The largest possible frequency, as given by `V`.
    #[must_use]
    pub fn max_with<V: RepValues<R>>() -> Self {
        Self::new(V::max())
    }

    /// Unary plus.
    ///
    /// Periods are always kept reduced, so this is the identity.
    #[must_use]
    pub fn pos(self) -> Self {
        self
    }

    /// Increments the tick count, returning the frequency after the change.
    pub fn inc(&mut self) -> &mut Self {
        self.count = self.count + R::one();
        self
    }

    /// Decrements the tick count, returning the frequency after the change.
    pub fn dec(&mut self) -> &mut Self {
        self.count = self.count - R::one();
        self
    }

    /// Increments the tick count, returning the frequency before the change.
    pub fn post_inc(&mut self) -> Self {
        let prev = *self;
        self.inc();
        prev
    }

    /// Decrements the tick count, returning the frequency before the change.
    pub fn post_dec(&mut self) -> Self {
        let prev = *self;
        self.dec();
        prev
    }

    /// Converts into `To`, see [`frequency_cast`].
    #[must_use]
    pub fn cast<To: FrequencyType>(self) -> To {
        frequency_cast(self)
    }
}

impl<R: Copy, P> Clone for Frequency<R, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Copy, P> Copy for Frequency<R, P> {}

impl<R: Rep, P: Period> Default for Frequency<R, P> {
    fn default() -> Self {
        Self::new(R::zero())
    }
}

impl<R: CommonRep + Eq, P: Period> Eq for Frequency<R, P> {}

impl<R: CommonRep + Ord, P: Period> Ord for Frequency<R, P> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.count.cmp(&other.count)
    }
}

impl<R: Rep + Hash, P: Period> Hash for Frequency<R, P> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.count.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        period::{Kilo, Milli, Nano},
        si::*,
    };

    #[test]
    fn default() {
        assert_eq!(0, Frequency::<i32>::default().count());
        assert_eq!(0.0, Frequency::<f32>::default().count());
    }

    #[test]
    fn copy() {
        let f1 = Frequency::<i32>::new(32);
        let f1_copy = f1;
        assert_eq!(f1.count(), f1_copy.count());

        let f2 = Frequency::<f32>::new(-16.25);
        let mut f2_copy = Frequency::<f32>::default();
        assert_eq!(0.0, f2_copy.count());
        f2_copy = f2;
        assert_eq!(f2.count(), f2_copy.count());
    }

    #[rstest::rstest]
    #[case(-1, Frequency::<i32>::new(-1))]
    #[case(1, Frequency::<i32>::new(1))]
    #[case(-1, Frequency::<i32>::from_count(-1i64))]
    #[case(44, Frequency::<i32, Milli>::from_count(44i16))]
    fn new_int(#[case] expected: i32, #[case] f: Frequency<i32, impl Period>) {
        assert_eq!(expected, f.count());
    }

    #[rstest::rstest]
    #[case(-1.5, Frequency::<f32>::new(-1.5))]
    #[case(0.5, Frequency::<f32>::new(0.5))]
    #[case(1.0, Frequency::<f32>::from_count(1))]
    #[case(-1.0, Frequency::<f32>::from_count(-1))]
    #[case(0.5, Frequency::<f32>::from_count(0.5f64))]
    fn new_float(#[case] expected: f32, #[case] f: Frequency<f32>) {
        assert_eq!(expected, f.count());
    }

    #[test]
    fn from_count_widens_float() {
        assert_eq!(-1.5, Frequency::<f64>::from_count(-1.5f32).count());
        assert_eq!(0.5, Frequency::<f64>::from_count(0.5f32).count());
    }

    #[test]
    fn from_frequency() {
        assert_eq!(1_000, Millihertz::from_frequency(1 * Hz).count());
        assert_eq!(3_000_000, Hertz::from_frequency(3 * MHz).count());
        assert_eq!(
            1_000_000_000,
            Frequency::<i64, Nano>::from_frequency(1 * Hz).count()
        );
        assert_eq!(0.001, Frequency::<f64, Kilo>::from_frequency(1 * Hz).count());
        assert_eq!(1.5, Frequency::<f64>::from_frequency(1.5 * Hz).count());
        assert_eq!(
            2_000,
            Frequency::<i32, Milli>::from_frequency(Frequency::<i16>::new(2)).count()
        );
    }

    struct Sentinel;

    impl RepValues<f64> for Sentinel {
        fn zero() -> f64 {
            -1.0
        }

        fn min() -> f64 {
            -2.0
        }

        fn max() -> f64 {
            2.0
        }
    }

    #[test]
    fn values() {
        assert_eq!(0, Frequency::<i32>::zero().count());
        assert_eq!(i32::MIN, Frequency::<i32>::min().count());
        assert_eq!(i32::MAX, Frequency::<i32>::max().count());

        assert_eq!(0.0, Frequency::<f32>::zero().count());
        assert_eq!(f32::MIN, Frequency::<f32>::min().count());
        assert_eq!(f32::MAX, Frequency::<f32>::max().count());

        assert_eq!(-1.0, Frequency::<f64>::zero_with::<Sentinel>().count());
        assert_eq!(-2.0, Frequency::<f64>::min_with::<Sentinel>().count());
        assert_eq!(2.0, Frequency::<f64>::max_with::<Sentinel>().count());
    }

    #[test]
    fn pos() {
        assert_eq!(Frequency::<i32>::default(), Frequency::<i32>::default().pos());
        assert_eq!(Frequency::<f32>::default(), Frequency::<f32>::default().pos());
        assert_eq!(-1 * Hz, (-1 * Hz).pos());
        assert_eq!(1 * Hz, (1 * Hz).pos());
        assert_eq!(-1.5 * Hz, (-1.5 * Hz).pos());
        assert_eq!(1.5 * Hz, (1.5 * Hz).pos());
    }

    #[test]
    fn increment() {
        let mut f1 = Frequency::<i32>::new(-1);
        assert_eq!(-1, f1.post_inc().count());
        assert_eq!(0, f1.count());
        assert_eq!(1, f1.inc().count());
        assert_eq!(1, f1.count());

        let mut f2 = Frequency::<f32>::new(-0.5);
        assert_eq!(-0.5, f2.post_inc().count());
        assert_eq!(0.5, f2.count());
        assert_eq!(1.5, f2.inc().count());
        assert_eq!(1.5, f2.count());
    }

    #[test]
    fn decrement() {
        let mut f1 = Frequency::<i32>::new(1);
        assert_eq!(1, f1.post_dec().count());
        assert_eq!(0, f1.count());
        assert_eq!(-1, f1.dec().count());
        assert_eq!(-1, f1.count());

        let mut f2 = Frequency::<f32>::new(1.5);
        assert_eq!(1.5, f2.post_dec().count());
        assert_eq!(0.5, f2.count());
        assert_eq!(-0.5, f2.dec().count());
        assert_eq!(-0.5, f2.count());
    }

    #[test]
    fn ord_and_hash() {
        use std::collections::BTreeSet;

        let set: BTreeSet<_> = [3 * kHz, 1 * kHz, 2 * kHz, 1 * kHz].into_iter().collect();
        assert_eq!(
            vec![1 * kHz, 2 * kHz, 3 * kHz],
            set.into_iter().collect::<Vec<_>>()
        );

        let set: std::collections::HashSet<_> = [1 * Hz, 1 * Hz, 2 * Hz].into_iter().collect();
        assert_eq!(2, set.len());
    }
}
