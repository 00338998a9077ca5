use crate::{
    period::{Gcd, Period},
    rep::Rep,
    Frequency,
};

/// The storage type able to represent both `Self` and `Rhs`.
///
/// Floating point wins over integers, wider wins over narrower, and mixing signedness picks a
/// signed type wide enough for the unsigned operand (capped at `i128`). `isize` and `usize` rank
/// as 64-bit types, and a fixed-width type wins over them at equal width.
pub trait CommonRep<Rhs: Rep = Self>: Rep {
    /// The common storage type.
    type Output: Rep;
}

/// Shorthand for `<A as CommonRep<B>>::Output`.
pub type CommonRepOf<A, B> = <A as CommonRep<B>>::Output;

/// The frequency type able to represent both `Self` and `Rhs`.
///
/// Its storage type is the [`CommonRep`] of the operands and its period is the [`Gcd`] of their
/// periods, which divides both periods exactly.
pub trait CommonFrequency<Rhs> {
    /// The common frequency type.
    type Output;
}

impl<R1, P1, R2, P2> CommonFrequency<Frequency<R2, P2>> for Frequency<R1, P1>
where
    R1: CommonRep<R2>,
    R2: Rep,
    P1: Period,
    P2: Period,
{
    type Output = Frequency<CommonRepOf<R1, R2>, Gcd<P1, P2>>;
}

/// Shorthand for `<A as CommonFrequency<B>>::Output`.
pub type Common<A, B> = <A as CommonFrequency<B>>::Output;

macro_rules! common_rep {
    ($($lhs:ty: [$($rhs:ty => $out:ty),* $(,)?]),* $(,)?) => {
        $(
            $(
                impl CommonRep<$rhs> for $lhs {
                    type Output = $out;
                }
            )*
        )*
    };
}

common_rep! {
    i8: [i8 => i8, i16 => i16, i32 => i32, i64 => i64, i128 => i128, isize => isize, u8 => i16, u16 => i32, u32 => i64, u64 => i128, u128 => i128, usize => i128, f32 => f32, f64 => f64],
    i16: [i8 => i16, i16 => i16, i32 => i32, i64 => i64, i128 => i128, isize => isize, u8 => i16, u16 => i32, u32 => i64, u64 => i128, u128 => i128, usize => i128, f32 => f32, f64 => f64],
    i32: [i8 => i32, i16 => i32, i32 => i32, i64 => i64, i128 => i128, isize => isize, u8 => i32, u16 => i32, u32 => i64, u64 => i128, u128 => i128, usize => i128, f32 => f32, f64 => f64],
    i64: [i8 => i64, i16 => i64, i32 => i64, i64 => i64, i128 => i128, isize => i64, u8 => i64, u16 => i64, u32 => i64, u64 => i128, u128 => i128, usize => i128, f32 => f32, f64 => f64],
    i128: [i8 => i128, i16 => i128, i32 => i128, i64 => i128, i128 => i128, isize => i128, u8 => i128, u16 => i128, u32 => i128, u64 => i128, u128 => i128, usize => i128, f32 => f32, f64 => f64],
    isize: [i8 => isize, i16 => isize, i32 => isize, i64 => i64, i128 => i128, isize => isize, u8 => isize, u16 => isize, u32 => isize, u64 => i128, u128 => i128, usize => i128, f32 => f32, f64 => f64],
    u8: [i8 => i16, i16 => i16, i32 => i32, i64 => i64, i128 => i128, isize => isize, u8 => u8, u16 => u16, u32 => u32, u64 => u64, u128 => u128, usize => usize, f32 => f32, f64 => f64],
    u16: [i8 => i32, i16 => i32, i32 => i32, i64 => i64, i128 => i128, isize => isize, u8 => u16, u16 => u16, u32 => u32, u64 => u64, u128 => u128, usize => usize, f32 => f32, f64 => f64],
    u32: [i8 => i64, i16 => i64, i32 => i64, i64 => i64, i128 => i128, isize => isize, u8 => u32, u16 => u32, u32 => u32, u64 => u64, u128 => u128, usize => usize, f32 => f32, f64 => f64],
    u64: [i8 => i128, i16 => i128, i32 => i128, i64 => i128, i128 => i128, isize => i128, u8 => u64, u16 => u64, u32 => u64, u64 => u64, u128 => u128, usize => u64, f32 => f32, f64 => f64],
    u128: [i8 => i128, i16 => i128, i32 => i128, i64 => i128, i128 => i128, isize => i128, u8 => u128, u16 => u128, u32 => u128, u64 => u128, u128 => u128, usize => u128, f32 => f32, f64 => f64],
    usize: [i8 => i128, i16 => i128, i32 => i128, i64 => i128, i128 => i128, isize => i128, u8 => usize, u16 => usize, u32 => usize, u64 => u64, u128 => u128, usize => usize, f32 => f32, f64 => f64],
    f32: [i8 => f32, i16 => f32, i32 => f32, i64 => f32, i128 => f32, isize => f32, u8 => f32, u16 => f32, u32 => f32, u64 => f32, u128 => f32, usize => f32, f32 => f32, f64 => f64],
    f64: [i8 => f64, i16 => f64, i32 => f64, i64 => f64, i128 => f64, isize => f64, u8 => f64, u16 => f64, u32 => f64, u64 => f64, u128 => f64, usize => f64, f32 => f64, f64 => f64],
}
