use super::{kHz, mHz, nHz, uHz, GHz, Hz, MHz, PHz, THz};
use crate::{
    period::{Giga, Kilo, Mega, Micro, Milli, Nano, Peta, Tera, Unity},
    Frequency,
};

macro_rules! impl_float_marker {
    ($($unit:ident => $period:ty),* $(,)?) => {
        $(
            impl core::ops::Mul<$unit> for f64 {
                type Output = Frequency<f64, $period>;

                fn mul(self, _rhs: $unit) -> Self::Output {
                    Self::Output::new(self)
                }
            }
        )*
    };
}

impl_float_marker!(
    nHz => Nano,
    uHz => Micro,
    mHz => Milli,
    Hz => Unity,
    kHz => Kilo,
    MHz => Mega,
    GHz => Giga,
    THz => Tera,
    PHz => Peta,
);
