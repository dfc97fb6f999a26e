// Logging is compiled in only with the `verbose-logging` feature.

macro_rules! fft_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "verbose-logging")]
        log::debug!($($arg)*);
    };
}

macro_rules! fft_trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "verbose-logging")]
        log::trace!($($arg)*);
    };
}
