//! Feature-gated event macros.
//!
//! With the `tracing` feature the macros forward to the `tracing` crate;
//! without it they expand to nothing and their arguments are not evaluated.

#[cfg(feature = "tracing")]
macro_rules! graph_event {
    (trace, $($arg:tt)+) => { ::tracing::trace!($($arg)+) };
    (debug, $($arg:tt)+) => { ::tracing::debug!($($arg)+) };
    (warn, $($arg:tt)+) => { ::tracing::warn!($($arg)+) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! graph_event {
    ($level:ident, $($arg:tt)+) => {};
}

pub(crate) use graph_event;
