use num_traits::{AsPrimitive, Bounded, NumCast, NumOps, One, Zero};

/// Storage type of a tick count.
///
/// Implemented for the primitive integer and floating point types. A custom storage type
/// (fixed point, saturating integer, ...) implements this trait to be usable in a
/// [`Frequency`](crate::Frequency); `Frequency` itself never implements it, so a frequency
/// cannot count frequencies.
///
/// Conversions between storage types go through a wide intermediate: `i128` for integral
/// storage and `f64` for floating point storage.
pub trait Rep: Copy + PartialEq + PartialOrd + Zero + One + NumOps + 'static {
    /// [`Integral`] or [`Floating`].
    type Kind: RepKind;
    /// The strategy providing [`Frequency::zero`], [`Frequency::min`] and [`Frequency::max`].
    ///
    /// [`Frequency::zero`]: crate::Frequency::zero
    /// [`Frequency::min`]: crate::Frequency::min
    /// [`Frequency::max`]: crate::Frequency::max
    type Values: RepValues<Self>;

    /// Converts into the wide integer intermediate, truncating toward zero.
    fn into_wide_int(self) -> i128;
    /// Converts into the wide integer intermediate, returning `None` if out of range.
    fn checked_into_wide_int(self) -> Option<i128>;
    /// Converts into `u128`, returning `None` if out of range.
    ///
    /// Used for the counts above `i128::MAX` that only unsigned storage can hold.
    fn checked_into_wide_uint(self) -> Option<u128>;
    /// Converts into the wide floating point intermediate.
    fn into_wide_float(self) -> f64;
    /// Narrows from the wide integer intermediate, as if by `as`.
    fn from_wide_int(v: i128) -> Self;
    /// Narrows from the wide floating point intermediate, as if by `as`.
    fn from_wide_float(v: f64) -> Self;
    /// Narrows from the wide integer intermediate, returning `None` if out of range.
    fn checked_from_wide_int(v: i128) -> Option<Self>;
    /// Narrows from the wide floating point intermediate, returning `None` if out of range.
    fn checked_from_wide_float(v: f64) -> Option<Self>;
    /// Narrows from `u128`, returning `None` if out of range.
    fn checked_from_wide_uint(v: u128) -> Option<Self>;
}

/// Whether a storage type can hold fractional ticks.
pub trait RepKind: 'static {
    /// `true` for [`Floating`].
    const FLOATING: bool;
}

/// Kind of storage types that hold whole ticks only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Integral {}

/// Kind of storage types that hold fractional ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Floating {}

impl RepKind for Integral {
    const FLOATING: bool = false;
}

impl RepKind for Floating {
    const FLOATING: bool = true;
}

/// Implemented for a pair of kinds when a count of kind `Self` can be stored in a kind `To`
/// without dropping a fractional part.
pub trait KeepsFraction<To: RepKind>: RepKind {}

impl KeepsFraction<Integral> for Integral {}
impl KeepsFraction<Floating> for Integral {}
impl KeepsFraction<Floating> for Floating {}

/// Returns `true` if `R` holds fractional ticks.
#[must_use]
pub const fn is_floating<R: Rep>() -> bool {
    <R::Kind as RepKind>::FLOATING
}

/// Converts a count between storage types through the wide intermediate.
#[inline]
pub(crate) fn convert<From: Rep, To: Rep>(v: From) -> To {
    if is_floating::<To>() {
        To::from_wide_float(v.into_wide_float())
    } else {
        To::from_wide_int(v.into_wide_int())
    }
}

/// Zero, smallest and largest values of a storage type.
///
/// [`DefaultValues`] supplies the natural limits of every bounded type. Implement this trait
/// on your own strategy type to supply other sentinels, either as [`Rep::Values`] of a custom
/// storage type or per call through [`Frequency::zero_with`](crate::Frequency::zero_with) and
/// friends.
pub trait RepValues<R> {
    /// The zero-length value.
    fn zero() -> R;
    /// The smallest possible value.
    fn min() -> R;
    /// The largest possible value.
    fn max() -> R;
}

/// Additive identity, lowest finite and largest finite value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DefaultValues;

impl<R: Zero + Bounded> RepValues<R> for DefaultValues {
    fn zero() -> R {
        R::zero()
    }

    fn min() -> R {
        R::min_value()
    }

    fn max() -> R {
        R::max_value()
    }
}

macro_rules! impl_rep_int {
    ($($t:ty),*) => {
        $(
            impl Rep for $t {
                type Kind = Integral;
                type Values = DefaultValues;

                #[inline]
                fn into_wide_int(self) -> i128 {
                    self.as_()
                }

                #[inline]
                fn checked_into_wide_int(self) -> Option<i128> {
                    <i128 as NumCast>::from(self)
                }

                #[inline]
                fn checked_into_wide_uint(self) -> Option<u128> {
                    <u128 as NumCast>::from(self)
                }

                #[inline]
                fn into_wide_float(self) -> f64 {
                    self.as_()
                }

                #[inline]
                fn from_wide_int(v: i128) -> Self {
                    v.as_()
                }

                #[inline]
                fn from_wide_float(v: f64) -> Self {
                    v.as_()
                }

                #[inline]
                fn checked_from_wide_int(v: i128) -> Option<Self> {
                    <Self as NumCast>::from(v)
                }

                #[inline]
                fn checked_from_wide_float(v: f64) -> Option<Self> {
                    <Self as NumCast>::from(v)
                }

                #[inline]
                fn checked_from_wide_uint(v: u128) -> Option<Self> {
                    <Self as NumCast>::from(v)
                }
            }
        )*
    };
}

macro_rules! impl_rep_float {
    ($($t:ty),*) => {
        $(
            impl Rep for $t {
                type Kind = Floating;
                type Values = DefaultValues;

                #[inline]
                fn into_wide_int(self) -> i128 {
                    self.as_()
                }

                #[inline]
                fn checked_into_wide_int(self) -> Option<i128> {
                    <i128 as NumCast>::from(self)
                }

                #[inline]
                fn checked_into_wide_uint(self) -> Option<u128> {
                    <u128 as NumCast>::from(self)
                }

                #[inline]
                fn into_wide_float(self) -> f64 {
                    self.as_()
                }

                #[inline]
                fn from_wide_int(v: i128) -> Self {
                    v.as_()
                }

                #[inline]
                fn from_wide_float(v: f64) -> Self {
                    v.as_()
                }

                #[inline]
                fn checked_from_wide_int(v: i128) -> Option<Self> {
                    Self::checked_from_wide_float(v.as_())
                }

                #[inline]
                fn checked_from_wide_float(v: f64) -> Option<Self> {
                    let narrowed: Self = v.as_();
                    (narrowed.is_finite() || !v.is_finite()).then_some(narrowed)
                }

                #[inline]
                fn checked_from_wide_uint(v: u128) -> Option<Self> {
                    Self::checked_from_wide_float(v.as_())
                }
            }
        )*
    };
}

impl_rep_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_rep_float!(f32, f64);
