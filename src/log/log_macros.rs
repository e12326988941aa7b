//! Leveled logging macros for [`Logger`](crate::log::logger::Logger).
//!
//! The format arguments are only evaluated inside the deferred message closure, so a
//! call at a level nobody subscribes to costs one mask test per routing entry.
//!
//! # Feature Flags
//! The built-in level macros are controlled by cargo features:
//! `log-debug`, `log-info`, `log-event`, `log-warn`, `log-error` (all on by default).
//!
//! If a feature is disabled, the corresponding macro expands to `Ok(())`, removing
//! the call and all formatting at compile time.

// ============================================================================
// 1. GENERIC MACRO
// ============================================================================

/// Logs at any level, including user-defined ones.
///
/// ```
/// use routelog::{logger_log, log::{logger::Logger, log_level::LogLevel}};
///
/// const VERBOSE: LogLevel = LogLevel::from_raw(1 << 8);
/// let log = Logger::disabled();
/// logger_log!(log, VERBOSE, "{} items", 3).unwrap();
/// ```
#[macro_export]
macro_rules! logger_log {
    ($logger:expr, $lvl:expr, $($arg:tt)*) => {
        $logger.log_message($lvl, || format!($($arg)*))
    };
}

// ============================================================================
// 2. LEVEL-SPECIFIC MACROS (Feature Gated)
// ============================================================================

// ---------------------- DEBUG ----------------------
#[cfg(feature = "log-debug")]
#[macro_export]
macro_rules! logger_debug { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::log_level::LogLevel::DEBUG, $($arg)*) } }

#[cfg(not(feature = "log-debug"))]
#[macro_export]
macro_rules! logger_debug {
    ($($arg:tt)*) => {
        Ok::<(), $crate::log::sink_error::SinkError>(())
    };
}

// ---------------------- INFO ----------------------
#[cfg(feature = "log-info")]
#[macro_export]
macro_rules! logger_info { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::log_level::LogLevel::INFO, $($arg)*) } }

#[cfg(not(feature = "log-info"))]
#[macro_export]
macro_rules! logger_info {
    ($($arg:tt)*) => {
        Ok::<(), $crate::log::sink_error::SinkError>(())
    };
}

// ---------------------- EVENT ----------------------
#[cfg(feature = "log-event")]
#[macro_export]
macro_rules! logger_event { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::log_level::LogLevel::EVENT, $($arg)*) } }

#[cfg(not(feature = "log-event"))]
#[macro_export]
macro_rules! logger_event {
    ($($arg:tt)*) => {
        Ok::<(), $crate::log::sink_error::SinkError>(())
    };
}

// ---------------------- WARN ----------------------
#[cfg(feature = "log-warn")]
#[macro_export]
macro_rules! logger_warn { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::log_level::LogLevel::WARN, $($arg)*) } }

#[cfg(not(feature = "log-warn"))]
#[macro_export]
macro_rules! logger_warn {
    ($($arg:tt)*) => {
        Ok::<(), $crate::log::sink_error::SinkError>(())
    };
}

// ---------------------- ERROR ----------------------
// Generally always enabled, but consistent structure allows user to disable if really needed.
#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! logger_error { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::log_level::LogLevel::ERROR, $($arg)*) } }

#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! logger_error {
    ($($arg:tt)*) => {
        Ok::<(), $crate::log::sink_error::SinkError>(())
    };
}
