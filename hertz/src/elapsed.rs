use core::time::Duration;

use num_traits::Zero;

use crate::{
    cast::{scale, try_scale},
    error::FrequencyError,
    log::debug,
    period::{Nano, Period, Quotient, Reciprocal},
    rep::Rep,
    FrequencyType,
};

/// An elapsed-time value made of a tick count and a tick period in seconds.
///
/// The conversions with frequencies go through the periods' units: a tick of `1/n` seconds
/// pairs with a tick of `n` hertz and the count is carried over as is, never inverted.
pub trait Elapsed: Sized {
    /// The storage type of the tick count.
    type Rep: Rep;
    /// The tick period, in seconds per tick.
    type Period: Period;

    /// Returns the tick count.
    fn ticks(&self) -> Self::Rep;
    /// Creates a value from a tick count.
    fn try_from_ticks(ticks: Self::Rep) -> Result<Self, FrequencyError>;
}

const NANOS_PER_SEC: u128 = 1_000_000_000;

impl Elapsed for Duration {
    type Rep = u128;
    type Period = Nano;

    fn ticks(&self) -> u128 {
        self.as_nanos()
    }

    fn try_from_ticks(ticks: u128) -> Result<Self, FrequencyError> {
        let secs =
            u64::try_from(ticks / NANOS_PER_SEC).map_err(|_| FrequencyError::NotRepresentable)?;
        Ok(Duration::new(secs, (ticks % NANOS_PER_SEC) as u32))
    }
}

/// Converts an elapsed-time value into the frequency type `To`.
///
/// ```
/// use core::time::Duration;
///
/// use hertz::{elapsed_cast, Gigahertz, Hertz};
///
/// assert_eq!(5, elapsed_cast::<Gigahertz, _>(&Duration::from_nanos(5)).count());
/// assert_eq!(5_000_000_000, elapsed_cast::<Hertz, _>(&Duration::from_nanos(5)).count());
/// ```
#[must_use]
pub fn elapsed_cast<To: FrequencyType, D: Elapsed>(d: &D) -> To {
    To::from_ticks(scale::<D::Rep, To::Rep, Quotient<Reciprocal<D::Period>, To::Period>>(
        d.ticks(),
    ))
}

/// Converts a frequency into the elapsed-time type `D`.
///
/// Fails when the count is negative or the scaled count does not fit `D`.
///
/// ```
/// use core::time::Duration;
///
/// use hertz::{si::*, try_elapsed_from, FrequencyError};
///
/// assert_eq!(Ok(Duration::from_nanos(5)), try_elapsed_from(5 * GHz));
/// assert_eq!(
///     Err(FrequencyError::NegativeDuration),
///     try_elapsed_from::<Duration, _>(-5 * GHz)
/// );
/// ```
pub fn try_elapsed_from<D: Elapsed, F: FrequencyType>(f: F) -> Result<D, FrequencyError> {
    let ticks = f.ticks();
    if ticks < F::Rep::zero() {
        debug!("Negative frequency count cannot be converted into a duration");
        return Err(FrequencyError::NegativeDuration);
    }
    let ticks = try_scale::<F::Rep, D::Rep, Quotient<Reciprocal<F::Period>, D::Period>>(ticks)?;
    D::try_from_ticks(ticks)
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;
    use crate::{
        period::{Giga, Tera},
        si::*,
        Frequency, Gigahertz, Hertz,
    };

    #[rstest::rstest]
    #[case(5, Duration::from_nanos(5))]
    #[case(1_000_000_000, Duration::from_secs(1))]
    #[case(0, Duration::ZERO)]
    fn to_gigahertz(#[case] expected: i32, #[case] d: Duration) {
        assert_eq!(expected, elapsed_cast::<Gigahertz, _>(&d).count());
    }

    #[test]
    fn to_other_scales() {
        assert_eq!(
            5_000_000_000,
            elapsed_cast::<Hertz, _>(&Duration::from_nanos(5)).count()
        );
        approx::assert_abs_diff_eq!(
            1.5,
            elapsed_cast::<Frequency<f64, Tera>, _>(&Duration::from_nanos(1_500)).count()
        );
        assert_eq!(
            1,
            elapsed_cast::<Frequency<i64, Tera>, _>(&Duration::from_nanos(1_999)).count()
        );
    }

    #[test]
    fn from_frequency() {
        assert_eq!(Ok(Duration::from_nanos(5)), try_elapsed_from(5 * GHz));
        assert_eq!(Ok(Duration::from_nanos(2)), try_elapsed_from(2_000 * THz));
        assert_eq!(Ok(Duration::ZERO), try_elapsed_from(999 * THz));
        assert_eq!(Ok(Duration::from_secs(3)), try_elapsed_from(3 * Hz));
        assert_eq!(Ok(Duration::from_nanos(1)), try_elapsed_from(1.5 * GHz));
    }

    #[test]
    fn from_frequency_fails() {
        assert_eq!(
            Err(FrequencyError::NegativeDuration),
            try_elapsed_from::<Duration, _>(-1 * GHz)
        );
        assert_eq!(
            Err(FrequencyError::NotRepresentable),
            try_elapsed_from::<Duration, _>(Frequency::<i128, Giga>::new(i128::MAX))
        );
        assert_eq!(
            Err(FrequencyError::NotFinite),
            try_elapsed_from::<Duration, _>(f64::INFINITY * GHz)
        );
    }

    #[test]
    fn round_trip() {
        let mut rng = rand::rng();
        (0..1000).for_each(|_| {
            let d = Duration::new(
                rng.random_range(0..=u64::from(u32::MAX)),
                rng.random_range(0..1_000_000_000),
            );
            let f = elapsed_cast::<Frequency<i128, Giga>, _>(&d);
            assert_eq!(Ok(d), try_elapsed_from(f));
        });
    }
}
