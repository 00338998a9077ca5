use core::fmt::{self, Write};

use derive_more::Display;

use super::Frequency;
use crate::{period::Period, rep::Rep};

/// The unit written after the count of a formatted [`Frequency`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum UnitSuffix {
    /// 10⁻⁹ Hz
    #[display("nHz")]
    Nano,
    /// 10⁻⁶ Hz
    #[display("µHz")]
    Micro,
    /// 10⁻³ Hz
    #[display("mHz")]
    Milli,
    /// 1 Hz
    #[display("Hz")]
    Unity,
    /// 10³ Hz
    #[display("KHz")]
    Kilo,
    /// 10⁶ Hz
    #[display("MHz")]
    Mega,
    /// 10⁹ Hz
    #[display("GHz")]
    Giga,
    /// 10¹² Hz
    #[display("THz")]
    Tera,
    /// 10¹⁵ Hz
    #[display("PHz")]
    Peta,
    /// Any other whole number of hertz.
    #[display("[{_0}]Hz")]
    Integer(u128),
    /// Any other fraction of hertz.
    #[display("[{_0}/{_1}]Hz")]
    Fraction(u128, u128),
}

impl UnitSuffix {
    /// Returns the suffix of the period `P`.
    #[must_use]
    pub const fn of<P: Period>() -> Self {
        match (P::NUM, P::DEN) {
            (1, 1_000_000_000) => Self::Nano,
            (1, 1_000_000) => Self::Micro,
            (1, 1_000) => Self::Milli,
            (1, 1) => Self::Unity,
            (1_000, 1) => Self::Kilo,
            (1_000_000, 1) => Self::Mega,
            (1_000_000_000, 1) => Self::Giga,
            (1_000_000_000_000, 1) => Self::Tera,
            (1_000_000_000_000_000, 1) => Self::Peta,
            (num, 1) => Self::Integer(num),
            (num, den) => Self::Fraction(num, den),
        }
    }
}

#[derive(Clone, Copy)]
struct Flags {
    sign_plus: bool,
    alternate: bool,
    precision: Option<usize>,
    zero_width: usize,
}

struct CharCount(usize);

impl Write for CharCount {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0 += s.chars().count();
        Ok(())
    }
}

/// Writes the count followed by `suffix`, padded to the formatter's width.
///
/// With the `0` flag the count is zero-padded after its sign so that count and suffix fill the
/// width, and fill and alignment are ignored. Otherwise the whole text is padded with the fill
/// character, right-aligned by default.
fn pad(
    f: &mut fmt::Formatter<'_>,
    suffix: UnitSuffix,
    count: impl Fn(&mut dyn Write, Flags) -> fmt::Result,
) -> fmt::Result {
    let mut flags = Flags {
        sign_plus: f.sign_plus(),
        alternate: f.alternate(),
        precision: f.precision(),
        zero_width: 0,
    };
    let Some(width) = f.width() else {
        count(&mut *f, flags)?;
        return write!(f, "{suffix}");
    };

    let mut len = CharCount(0);
    write!(len, "{suffix}")?;
    if f.sign_aware_zero_pad() {
        flags.zero_width = width.saturating_sub(len.0);
        count(&mut *f, flags)?;
        return write!(f, "{suffix}");
    }

    count(&mut len, flags)?;
    let padding = width.saturating_sub(len.0);
    let (pre, post) = match f.align() {
        Some(fmt::Alignment::Left) => (0, padding),
        Some(fmt::Alignment::Center) => (padding / 2, padding - padding / 2),
        Some(fmt::Alignment::Right) | None => (padding, 0),
    };
    let fill = f.fill();
    (0..pre).try_for_each(|_| f.write_char(fill))?;
    count(&mut *f, flags)?;
    write!(f, "{suffix}")?;
    (0..post).try_for_each(|_| f.write_char(fill))
}

macro_rules! impl_fmt {
    ($($trait:ident => $ty:literal),* $(,)?) => {
        $(
            impl<R: Rep + fmt::$trait, P: Period> fmt::$trait for Frequency<R, P> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    let count = self.count;
                    pad(f, UnitSuffix::of::<P>(), |w, flags| {
                        let zw = flags.zero_width;
                        match (flags.sign_plus, flags.alternate, flags.precision) {
                            (false, false, None) => write!(w, concat!("{0:01$", $ty, "}"), count, zw),
                            (true, false, None) => write!(w, concat!("{0:+01$", $ty, "}"), count, zw),
                            (false, true, None) => write!(w, concat!("{0:#01$", $ty, "}"), count, zw),
                            (true, true, None) => write!(w, concat!("{0:+#01$", $ty, "}"), count, zw),
                            (false, false, Some(p)) => write!(w, concat!("{0:01$.2$", $ty, "}"), count, zw, p),
                            (true, false, Some(p)) => write!(w, concat!("{0:+01$.2$", $ty, "}"), count, zw, p),
                            (false, true, Some(p)) => write!(w, concat!("{0:#01$.2$", $ty, "}"), count, zw, p),
                            (true, true, Some(p)) => write!(w, concat!("{0:+#01$.2$", $ty, "}"), count, zw, p),
                        }
                    })
                }
            }
        )*
    };
}

impl_fmt!(
    Display => "",
    Debug => "?",
    LowerHex => "x",
    UpperHex => "X",
    Octal => "o",
    Binary => "b",
    LowerExp => "e",
    UpperExp => "E",
);
