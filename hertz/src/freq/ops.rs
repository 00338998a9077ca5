use core::{
    cmp::Ordering,
    ops::{
        Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
    },
};

use super::Frequency;
use crate::{
    cast::scale,
    common::{CommonRep, CommonRepOf},
    period::{period_eq, Gcd, Period, Quotient},
    rep::{convert, Integral, Rep},
};

/// Converts both counts into the common frequency type of the operands.
#[inline]
fn unify<R1, P1, R2, P2>(
    lhs: Frequency<R1, P1>,
    rhs: Frequency<R2, P2>,
) -> (CommonRepOf<R1, R2>, CommonRepOf<R1, R2>)
where
    R1: CommonRep<R2>,
    R2: Rep,
    P1: Period,
    P2: Period,
{
    (
        scale::<R1, CommonRepOf<R1, R2>, Quotient<P1, Gcd<P1, P2>>>(lhs.count()),
        scale::<R2, CommonRepOf<R1, R2>, Quotient<P2, Gcd<P1, P2>>>(rhs.count()),
    )
}

impl<R1, P1, R2, P2> PartialEq<Frequency<R2, P2>> for Frequency<R1, P1>
where
    R1: CommonRep<R2>,
    R2: Rep,
    P1: Period,
    P2: Period,
{
    fn eq(&self, other: &Frequency<R2, P2>) -> bool {
        let (l, r) = unify(*self, *other);
        l == r
    }
}

impl<R1, P1, R2, P2> PartialOrd<Frequency<R2, P2>> for Frequency<R1, P1>
where
    R1: CommonRep<R2>,
    R2: Rep,
    P1: Period,
    P2: Period,
{
    fn partial_cmp(&self, other: &Frequency<R2, P2>) -> Option<Ordering> {
        let (l, r) = unify(*self, *other);
        l.partial_cmp(&r)
    }
}

impl<R1, P1, R2, P2> Add<Frequency<R2, P2>> for Frequency<R1, P1>
where
    R1: CommonRep<R2>,
    R2: Rep,
    P1: Period,
    P2: Period,
{
    type Output = Frequency<CommonRepOf<R1, R2>, Gcd<P1, P2>>;

    fn add(self, rhs: Frequency<R2, P2>) -> Self::Output {
        let (l, r) = unify(self, rhs);
        Frequency::new(l + r)
    }
}

impl<R1, P1, R2, P2> Sub<Frequency<R2, P2>> for Frequency<R1, P1>
where
    R1: CommonRep<R2>,
    R2: Rep,
    P1: Period,
    P2: Period,
{
    type Output = Frequency<CommonRepOf<R1, R2>, Gcd<P1, P2>>;

    fn sub(self, rhs: Frequency<R2, P2>) -> Self::Output {
        let (l, r) = unify(self, rhs);
        Frequency::new(l - r)
    }
}

impl<R1, P1, R2, P2> Div<Frequency<R2, P2>> for Frequency<R1, P1>
where
    R1: CommonRep<R2>,
    R2: Rep,
    P1: Period,
    P2: Period,
{
    type Output = CommonRepOf<R1, R2>;

    fn div(self, rhs: Frequency<R2, P2>) -> Self::Output {
        let (l, r) = unify(self, rhs);
        l / r
    }
}

impl<R1, P1, R2, P2> Rem<Frequency<R2, P2>> for Frequency<R1, P1>
where
    R1: CommonRep<R2>,
    R2: Rep,
    P1: Period,
    P2: Period,
    CommonRepOf<R1, R2>: Rep<Kind = Integral>,
{
    type Output = Frequency<CommonRepOf<R1, R2>, Gcd<P1, P2>>;

    fn rem(self, rhs: Frequency<R2, P2>) -> Self::Output {
        let (l, r) = unify(self, rhs);
        Frequency::new(l % r)
    }
}

impl<R: Rep + Neg<Output = R>, P: Period> Neg for Frequency<R, P> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.count)
    }
}

// `P2` is the same ratio as `P` under another name, such as the `Gcd` period of a sum.
impl<R: Rep, P: Period, P2: Period> AddAssign<Frequency<R, P2>> for Frequency<R, P> {
    fn add_assign(&mut self, rhs: Frequency<R, P2>) {
        const { assert!(period_eq::<P, P2>(), "compound assignment needs equal periods") };
        self.count = self.count + rhs.count;
    }
}

impl<R: Rep, P: Period, P2: Period> SubAssign<Frequency<R, P2>> for Frequency<R, P> {
    fn sub_assign(&mut self, rhs: Frequency<R, P2>) {
        const { assert!(period_eq::<P, P2>(), "compound assignment needs equal periods") };
        self.count = self.count - rhs.count;
    }
}

impl<R: Rep, P: Period> MulAssign<R> for Frequency<R, P> {
    fn mul_assign(&mut self, rhs: R) {
        self.count = self.count * rhs;
    }
}

impl<R: Rep, P: Period> DivAssign<R> for Frequency<R, P> {
    fn div_assign(&mut self, rhs: R) {
        self.count = self.count / rhs;
    }
}

impl<R: Rep<Kind = Integral>, P: Period> RemAssign<R> for Frequency<R, P> {
    fn rem_assign(&mut self, rhs: R) {
        self.count = self.count % rhs;
    }
}

impl<R: Rep<Kind = Integral>, P: Period, P2: Period> RemAssign<Frequency<R, P2>>
    for Frequency<R, P>
{
    fn rem_assign(&mut self, rhs: Frequency<R, P2>) {
        const { assert!(period_eq::<P, P2>(), "compound assignment needs equal periods") };
        self.count = self.count % rhs.count;
    }
}

macro_rules! impl_scalar_ops {
    ($($t:ty),*) => {
        $(
            impl<R: CommonRep<$t>, P: Period> Mul<$t> for Frequency<R, P> {
                type Output = Frequency<CommonRepOf<R, $t>, P>;

                fn mul(self, rhs: $t) -> Self::Output {
                    let (l, r): (CommonRepOf<R, $t>, CommonRepOf<R, $t>) = (convert(self.count), convert(rhs));
                    Frequency::new(l * r)
                }
            }

            impl<R: CommonRep<$t>, P: Period> Mul<Frequency<R, P>> for $t {
                type Output = Frequency<CommonRepOf<R, $t>, P>;

                fn mul(self, rhs: Frequency<R, P>) -> Self::Output {
                    let (l, r): (CommonRepOf<R, $t>, CommonRepOf<R, $t>) = (convert(self), convert(rhs.count));
                    Frequency::new(l * r)
                }
            }

            impl<R: CommonRep<$t>, P: Period> Div<$t> for Frequency<R, P> {
                type Output = Frequency<CommonRepOf<R, $t>, P>;

                fn div(self, rhs: $t) -> Self::Output {
                    let (l, r): (CommonRepOf<R, $t>, CommonRepOf<R, $t>) = (convert(self.count), convert(rhs));
                    Frequency::new(l / r)
                }
            }

            impl<R: CommonRep<$t>, P: Period> Rem<$t> for Frequency<R, P>
            where
                CommonRepOf<R, $t>: Rep<Kind = Integral>,
            {
                type Output = Frequency<CommonRepOf<R, $t>, P>;

                fn rem(self, rhs: $t) -> Self::Output {
                    let (l, r): (CommonRepOf<R, $t>, CommonRepOf<R, $t>) = (convert(self.count), convert(rhs));
                    Frequency::new(l % r)
                }
            }
        )*
    };
}

impl_scalar_ops!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
