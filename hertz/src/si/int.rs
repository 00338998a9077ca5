use super::{
    kHz, mHz, nHz, uHz, GHz, Gigahertz, Hertz, Hz, Kilohertz, MHz, Megahertz, Microhertz,
    Millihertz, Nanohertz, PHz, Petahertz, THz, Terahertz,
};

macro_rules! impl_int_marker {
    ($($t:ty: $unit:ident => $freq:ident),* $(,)?) => {
        $(
            impl core::ops::Mul<$unit> for $t {
                type Output = $freq;

                fn mul(self, _rhs: $unit) -> Self::Output {
                    Self::Output::new(self)
                }
            }
        )*
    };
}

impl_int_marker!(
    i64: nHz => Nanohertz,
    i64: uHz => Microhertz,
    i64: mHz => Millihertz,
    i64: Hz => Hertz,
    i64: kHz => Kilohertz,
    i64: MHz => Megahertz,
    i32: GHz => Gigahertz,
    i32: THz => Terahertz,
    i16: PHz => Petahertz,
);
