#[cfg(feature = "tracing")]
macro_rules! shtrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "sticky_headers", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! shtrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! shdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "sticky_headers", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! shdebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! shwarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "sticky_headers", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! shwarn {
    ($($tt:tt)*) => {};
}
