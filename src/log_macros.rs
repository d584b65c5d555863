// Forward to the `log` facade when the `logging` feature is on; otherwise
// the arguments are type checked and dropped.

macro_rules! advise {
    ($($arg:tt)+) => {{
        #[cfg(feature = "logging")]
        log::warn!($($arg)+);
        #[cfg(not(feature = "logging"))]
        let _ = format_args!($($arg)+);
    }};
}

macro_rules! trace_edit {
    ($($arg:tt)+) => {{
        #[cfg(feature = "logging")]
        log::debug!($($arg)+);
        #[cfg(not(feature = "logging"))]
        let _ = format_args!($($arg)+);
    }};
}
