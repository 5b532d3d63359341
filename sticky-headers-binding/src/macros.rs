#[cfg(feature = "tracing")]
macro_rules! bdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "sticky_headers_binding", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! bdebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! bwarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "sticky_headers_binding", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! bwarn {
    ($($tt:tt)*) => {};
}
