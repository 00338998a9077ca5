#![allow(clippy::single_component_path_imports)]

#[macro_use]
mod _log {
    macro_rules! debug {
        ($($arg:tt)+) => {
            #[cfg(feature = "tracing")]
            tracing::debug!($($arg)+);
        };
    }

    #[cfg(feature = "tracing")]
    macro_rules! trace {
        ($($arg:tt)+) => {
            tracing::trace!($($arg)+);
        };
    }
}

pub(crate) use debug;
#[cfg(feature = "tracing")]
pub(crate) use trace;
