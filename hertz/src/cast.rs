#[cfg(feature = "tracing")]
use crate::log::trace;
use crate::{
    error::FrequencyError,
    period::{Period, Quotient},
    rep::{is_floating, Rep},
    Frequency,
};

mod private {
    pub trait Sealed {}

    impl<R, P> Sealed for crate::Frequency<R, P> {}
}

/// Implemented by every [`Frequency`], exposing its storage type and period.
///
/// Used as the target of [`frequency_cast`] so the caller names the whole frequency type at once.
pub trait FrequencyType: Copy + private::Sealed {
    /// The storage type.
    type Rep: Rep;
    /// The tick period.
    type Period: Period;

    /// Returns the tick count.
    fn ticks(self) -> Self::Rep;
    /// Creates a frequency from a tick count.
    fn from_ticks(ticks: Self::Rep) -> Self;
}

impl<R: Rep, P: Period> FrequencyType for Frequency<R, P> {
    type Rep = R;
    type Period = P;

    #[inline]
    fn ticks(self) -> R {
        self.count()
    }

    #[inline]
    fn from_ticks(ticks: R) -> Self {
        Self::new(ticks)
    }
}

/// Converts `f` into the frequency type `To`.
///
/// The count is multiplied by `From::Period / To::Period` in `i128` when both storage types are
/// integral and in `f64` otherwise, then narrowed once into `To::Rep`. Integral targets truncate
/// toward zero. Overflow follows the native behaviour of the intermediate type.
///
/// ```
/// use hertz::{frequency_cast, si::*, Frequency, Hertz, Nano};
///
/// assert_eq!(1, frequency_cast::<Hertz, _>(1999 * mHz).count());
/// assert_eq!(
///     2_000_000_000,
///     frequency_cast::<Frequency<i64, Nano>, _>(2 * Hz).count()
/// );
/// ```
#[must_use]
pub fn frequency_cast<To: FrequencyType, From: FrequencyType>(f: From) -> To {
    To::from_ticks(scale::<From::Rep, To::Rep, Quotient<From::Period, To::Period>>(f.ticks()))
}

/// Converts `f` into the frequency type `To`, reporting overflow and narrowing.
///
/// Same arithmetic as [`frequency_cast`].
///
/// ```
/// use hertz::{si::*, try_frequency_cast, Frequency, FrequencyError, Tera};
///
/// assert_eq!(
///     Ok(1_000),
///     try_frequency_cast::<Frequency<i16, Tera>, _>(1 * PHz).map(|f| f.count())
/// );
/// assert_eq!(
///     Err(FrequencyError::NotRepresentable),
///     try_frequency_cast::<Frequency<i8, Tera>, _>(1 * PHz)
/// );
/// ```
pub fn try_frequency_cast<To: FrequencyType, From: FrequencyType>(
    f: From,
) -> Result<To, FrequencyError> {
    try_scale::<From::Rep, To::Rep, Quotient<From::Period, To::Period>>(f.ticks())
        .map(To::from_ticks)
}

/// Multiplies `count` by `Q` through the wide intermediate.
#[inline]
pub(crate) fn scale<From: Rep, To: Rep, Q: Period>(count: From) -> To {
    if is_floating::<From>() || is_floating::<To>() {
        let v = count.into_wide_float();
        To::from_wide_float(match (Q::NUM, Q::DEN) {
            (1, 1) => v,
            (1, den) => v / den as f64,
            (num, 1) => v * num as f64,
            (num, den) => v * num as f64 / den as f64,
        })
    } else {
        let v = count.into_wide_int();
        To::from_wide_int(match (Q::NUM, Q::DEN) {
            (1, 1) => v,
            (1, den) => v / den as i128,
            (num, 1) => v * num as i128,
            (num, den) => v * num as i128 / den as i128,
        })
    }
}

/// Checked variant of [`scale`].
pub(crate) fn try_scale<From: Rep, To: Rep, Q: Period>(count: From) -> Result<To, FrequencyError> {
    let result = if is_floating::<From>() || is_floating::<To>() {
        try_scale_float::<From, To, Q>(count)
    } else {
        try_scale_int::<From, To, Q>(count)
    };
    #[cfg(feature = "tracing")]
    let result = result.inspect_err(|e| {
        trace!("Scaling by {}/{} failed: {}", Q::NUM, Q::DEN, e);
    });
    result
}

fn try_scale_float<From: Rep, To: Rep, Q: Period>(count: From) -> Result<To, FrequencyError> {
    let v = count.into_wide_float();
    if !v.is_finite() {
        return Err(FrequencyError::NotFinite);
    }
    let scaled = v * Q::NUM as f64 / Q::DEN as f64;
    if !scaled.is_finite() {
        return Err(overflow::<Q>());
    }
    To::checked_from_wide_float(scaled).ok_or(FrequencyError::NotRepresentable)
}

fn try_scale_int<From: Rep, To: Rep, Q: Period>(count: From) -> Result<To, FrequencyError> {
    match count.checked_into_wide_int() {
        Some(v) => {
            let (Ok(num), Ok(den)) = (i128::try_from(Q::NUM), i128::try_from(Q::DEN)) else {
                return Err(overflow::<Q>());
            };
            let v = v.checked_mul(num).ok_or(overflow::<Q>())?;
            To::checked_from_wide_int(v / den).ok_or(FrequencyError::NotRepresentable)
        }
        // above i128::MAX, only reachable from u128
        None => {
            let v = count
                .checked_into_wide_uint()
                .ok_or(FrequencyError::NotRepresentable)?
                .checked_mul(Q::NUM)
                .ok_or(overflow::<Q>())?;
            To::checked_from_wide_uint(v / Q::DEN).ok_or(FrequencyError::NotRepresentable)
        }
    }
}

const fn overflow<Q: Period>() -> FrequencyError {
    FrequencyError::Overflow {
        num: Q::NUM,
        den: Q::DEN,
    }
}
