#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! Temporal frequency as a typed quantity.
//!
//! A [`Frequency`] is a tick count of storage type `R` and a tick period `P`, a positive
//! rational number of hertz known at compile time. Frequencies of different scales are
//! different types. They can be added, compared and divided with each other, the result
//! being of their [common type](Common), and are converted between scales with
//! [`Frequency::from_frequency`] when no precision is lost or [`frequency_cast`] otherwise.
//!
//! ```
//! use hertz::{si::*, Frequency, Hertz, Kilo};
//!
//! let sum = 1 * kHz + 250 * Hz;
//! assert_eq!(1_250, sum.count());
//! assert_eq!("1250Hz", sum.to_string());
//!
//! let k: Frequency<f64, Kilo> = Frequency::from_frequency(sum);
//! assert_eq!(1.25, k.count());
//! assert_eq!(1, k.cast::<Frequency<i64, Kilo>>().count());
//! assert!(1 * kHz < Hertz::new(1_001));
//! ```
//!
//! Modulo is only defined for integral storage.
//!
//! ```compile_fail
//! use hertz::si::*;
//!
//! let _ = (1.5 * Hz) % (1.0 * Hz);
//! ```
//!
//! # Feature flags
//!
//! - `std` (default): links the standard library.
//! - `tracing`: logs failed conversions with [`tracing`](https://docs.rs/tracing).

mod cast;
mod common;
mod elapsed;
mod error;
mod freq;
mod log;
/// Tick periods.
pub mod period;
mod rep;
pub mod si;
mod utils;

pub use cast::{frequency_cast, try_frequency_cast, FrequencyType};
pub use common::{Common, CommonFrequency, CommonRep, CommonRepOf};
pub use elapsed::{elapsed_cast, try_elapsed_from, Elapsed};
pub use error::FrequencyError;
pub use freq::{Frequency, UnitSuffix};
pub use period::{
    period_eq, Gcd, Giga, Kilo, Mega, Micro, Milli, Nano, Peta, Period, Quotient, Ratio,
    Reciprocal, Tera, Unity,
};
pub use rep::{
    is_floating, DefaultValues, Floating, Integral, KeepsFraction, Rep, RepKind, RepValues,
};
pub use si::{
    Gigahertz, Hertz, Kilohertz, Megahertz, Microhertz, Millihertz, Nanohertz, Petahertz,
    Terahertz,
};
