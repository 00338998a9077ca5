//! SI frequency units.
//!
//! Each unit marker turns a number into a frequency of that unit: `5 * kHz` is a
//! [`Kilohertz`] and `1.5 * kHz` is a `Frequency<f64, Kilo>`.

mod float;
mod int;

use crate::{
    period::{Giga, Kilo, Mega, Micro, Milli, Nano, Peta, Tera, Unity},
    Frequency,
};

/// \[nHz\]
#[allow(non_camel_case_types)]
pub struct nHz;

/// \[µHz\]
#[allow(non_camel_case_types)]
pub struct uHz;

/// \[mHz\]
#[allow(non_camel_case_types)]
pub struct mHz;

/// \[Hz\]
pub struct Hz;

/// \[kHz\]
#[allow(non_camel_case_types)]
pub struct kHz;

/// \[MHz\]
pub struct MHz;

/// \[GHz\]
pub struct GHz;

/// \[THz\]
pub struct THz;

/// \[PHz\]
pub struct PHz;

/// Nanohertz, at least 64 bits wide.
pub type Nanohertz = Frequency<i64, Nano>;
/// Microhertz, at least 55 bits wide.
pub type Microhertz = Frequency<i64, Micro>;
/// Millihertz, at least 45 bits wide.
pub type Millihertz = Frequency<i64, Milli>;
/// Hertz, at least 35 bits wide.
pub type Hertz = Frequency<i64, Unity>;
/// Kilohertz, at least 29 bits wide.
pub type Kilohertz = Frequency<i64, Kilo>;
/// Megahertz, at least 23 bits wide.
pub type Megahertz = Frequency<i64, Mega>;
/// Gigahertz, at least 17 bits wide.
pub type Gigahertz = Frequency<i32, Giga>;
/// Terahertz, at least 11 bits wide.
pub type Terahertz = Frequency<i32, Tera>;
/// Petahertz, at least 5 bits wide.
pub type Petahertz = Frequency<i16, Peta>;
