use core::marker::PhantomData;

use crate::utils::int::{gcd, lcm};

/// A positive rational tick period, in hertz per tick.
///
/// Periods only exist as type parameters. Implementors are zero-sized markers whose
/// [`NUM`](Period::NUM) and [`DEN`](Period::DEN) are kept in lowest terms.
pub trait Period: 'static {
    /// Numerator of the reduced ratio.
    const NUM: u128;
    /// Denominator of the reduced ratio.
    const DEN: u128;
}

/// The ratio `N/D`.
///
/// `Ratio<20, 2>` and `Ratio<10>` name the same period.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Ratio<const N: u128, const D: u128 = 1>;

const fn reduce(num: u128, den: u128) -> (u128, u128) {
    let g = gcd(num, den);
    if g == 0 {
        return (0, 0);
    }
    (num / g, den / g)
}

impl<const N: u128, const D: u128> Period for Ratio<N, D> {
    const NUM: u128 = reduce(N, D).0;
    const DEN: u128 = reduce(N, D).1;
}

/// The greatest period dividing both `P1` and `P2`.
///
/// This is the period of the common type of two frequencies: `gcd(n1, n2) / lcm(d1, d2)`.
pub struct Gcd<P1, P2>(PhantomData<(P1, P2)>);

impl<P1: Period, P2: Period> Period for Gcd<P1, P2> {
    const NUM: u128 = gcd(P1::NUM, P2::NUM);
    const DEN: u128 = lcm(P1::DEN, P2::DEN);
}

/// The ratio `P1 / P2`.
pub struct Quotient<P1, P2>(PhantomData<(P1, P2)>);

impl<P1: Period, P2: Period> Period for Quotient<P1, P2> {
    const NUM: u128 =
        (P1::NUM / gcd(P1::NUM, P2::NUM)) * (P2::DEN / gcd(P1::DEN, P2::DEN));
    const DEN: u128 =
        (P1::DEN / gcd(P1::DEN, P2::DEN)) * (P2::NUM / gcd(P1::NUM, P2::NUM));
}

/// The ratio `1 / P`.
pub struct Reciprocal<P>(PhantomData<P>);

impl<P: Period> Period for Reciprocal<P> {
    const NUM: u128 = P::DEN;
    const DEN: u128 = P::NUM;
}

/// Returns `true` if `P1` and `P2` are the same ratio.
#[must_use]
pub const fn period_eq<P1: Period, P2: Period>() -> bool {
    P1::NUM == P2::NUM && P1::DEN == P2::DEN
}

/// Returns `true` if `P` is a valid tick period, i.e. strictly positive.
#[must_use]
pub const fn is_valid<P: Period>() -> bool {
    P::NUM > 0 && P::DEN > 0
}

/// 10⁻⁹
pub type Nano = Ratio<1, 1_000_000_000>;
/// 10⁻⁶
pub type Micro = Ratio<1, 1_000_000>;
/// 10⁻³
pub type Milli = Ratio<1, 1_000>;
/// 1
pub type Unity = Ratio<1>;
/// 10³
pub type Kilo = Ratio<1_000>;
/// 10⁶
pub type Mega = Ratio<1_000_000>;
/// 10⁹
pub type Giga = Ratio<1_000_000_000>;
/// 10¹²
pub type Tera = Ratio<1_000_000_000_000>;
/// 10¹⁵
pub type Peta = Ratio<1_000_000_000_000_000>;
