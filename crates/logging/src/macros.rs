//! crates/logging/src/macros.rs
//! Call-site helpers for operand lists and formatted writes.

/// Builds an operand slice for the plain and line entry points.
///
/// # Example
/// ```
/// use bitlog::{LevelSet, Logger, args};
///
/// let logger = Logger::new(Vec::new(), LevelSet::INFO);
/// logger.info(args!["copied ", 3, 4, " files"]).unwrap();
/// assert_eq!(logger.into_inner(), b"[INFO] copied 3 4 files\n");
/// ```
#[macro_export]
macro_rules! args {
    ($($arg:expr),* $(,)?) => {
        &[$($crate::Arg::from($arg)),*]
    };
}

/// Formatted write at an explicit level.
///
/// # Example
/// ```
/// use bitlog::{LevelSet, Logger, at_levelf};
///
/// let logger = Logger::new(Vec::new(), LevelSet::ALL);
/// at_levelf!(logger, LevelSet::WARN | LevelSet::ERROR, "{} of {}", 1, 2).unwrap();
/// assert_eq!(logger.into_inner(), b"[ERROR|WARNING] 1 of 2\n");
/// ```
#[macro_export]
macro_rules! at_levelf {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.at_levelf($level, ::std::format_args!($($arg)+))
    };
}

/// Formatted write at INFO.
#[macro_export]
macro_rules! printf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.printf(::std::format_args!($($arg)+))
    };
}

/// Formatted write at DEBUG.
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debugf(::std::format_args!($($arg)+))
    };
}

/// Formatted write at INFO.
#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(::std::format_args!($($arg)+))
    };
}

/// Formatted write at WARN.
#[macro_export]
macro_rules! warnf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warnf(::std::format_args!($($arg)+))
    };
}

/// Formatted write at ERROR.
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(::std::format_args!($($arg)+))
    };
}

/// Formatted write at FATAL followed by an unwind with [`Fatal`](crate::Fatal).
#[macro_export]
macro_rules! fatalf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatalf(::std::format_args!($($arg)+))
    };
}
