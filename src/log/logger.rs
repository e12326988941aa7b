use crate::log::{
    log_level::LogLevel, logger_configuration::LoggerConfiguration, sink_error::SinkError,
};

/// Routes log calls to the sinks of a [`LoggerConfiguration`].
///
/// Dispatch is synchronous: a call returns once every matching sink has been
/// written to, in entry order and then sink order. The message closure runs at most
/// once per call, and only if some entry matches:
///
/// ```
/// use routelog::log::logger::Logger;
///
/// let log = Logger::disabled();
/// log.debug(|| unreachable!("never built when nothing listens")).unwrap();
/// ```
///
/// Custom levels get their own entry points through an extension trait, without
/// touching `Logger`:
///
/// ```
/// use routelog::log::{logger::Logger, log_level::LogLevel, sink_error::SinkError};
///
/// const VERBOSE: LogLevel = LogLevel::from_raw(1 << 8);
///
/// trait VerboseExt {
///     fn verbose(&self, message: impl FnOnce() -> String) -> Result<(), SinkError>;
/// }
///
/// impl VerboseExt for Logger {
///     fn verbose(&self, message: impl FnOnce() -> String) -> Result<(), SinkError> {
///         self.log_message(VERBOSE, message)
///     }
/// }
/// ```
#[derive(Clone, Debug, Default)]
pub struct Logger {
    configuration: LoggerConfiguration,
}

impl Logger {
    #[must_use]
    pub fn new(configuration: LoggerConfiguration) -> Self {
        Self { configuration }
    }

    /// A logger with no routes; every call is a no-op.
    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn configuration(&self) -> &LoggerConfiguration {
        &self.configuration
    }

    /// True if a call at `level` would reach at least one sink.
    #[must_use]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        self.configuration.is_enabled(level)
    }

    /// Dispatches one event at `level`.
    ///
    /// `message` is invoked lazily, at most once, and its result is shared by every
    /// matching sink. A sink listed in several matching entries is written once per
    /// entry.
    ///
    /// # Errors
    /// Returns the first error reported by a sink. Sinks after the failing one are not
    /// invoked, and sinks already written to are left as they are.
    pub fn log_message<F>(&self, level: LogLevel, message: F) -> Result<(), SinkError>
    where
        F: FnOnce() -> String,
    {
        let mut matching = self
            .configuration
            .entries()
            .iter()
            .filter(|entry| entry.matches(level))
            .peekable();
        if matching.peek().is_none() {
            return Ok(());
        }

        let text = message();
        for entry in matching {
            for sink in entry.sinks() {
                sink.write(&text, level, entry.formatters())?;
            }
        }
        Ok(())
    }

    /// # Errors
    /// See [`Logger::log_message`].
    pub fn debug<F: FnOnce() -> String>(&self, message: F) -> Result<(), SinkError> {
        self.log_message(LogLevel::DEBUG, message)
    }

    /// # Errors
    /// See [`Logger::log_message`].
    pub fn info<F: FnOnce() -> String>(&self, message: F) -> Result<(), SinkError> {
        self.log_message(LogLevel::INFO, message)
    }

    /// # Errors
    /// See [`Logger::log_message`].
    pub fn event<F: FnOnce() -> String>(&self, message: F) -> Result<(), SinkError> {
        self.log_message(LogLevel::EVENT, message)
    }

    /// # Errors
    /// See [`Logger::log_message`].
    pub fn warn<F: FnOnce() -> String>(&self, message: F) -> Result<(), SinkError> {
        self.log_message(LogLevel::WARN, message)
    }

    /// # Errors
    /// See [`Logger::log_message`].
    pub fn error<F: FnOnce() -> String>(&self, message: F) -> Result<(), SinkError> {
        self.log_message(LogLevel::ERROR, message)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use crate::log::{
        log_formatter::{LevelPrefixFormatter, LogFormatter},
        log_sink::{FnSink, LogSink},
        recording_sink::RecordingSink,
    };
    use std::{
        cell::Cell,
        sync::{Arc, Mutex},
    };

    #[test]
    fn message_is_built_once_for_many_sinks() {
        let a = RecordingSink::shared();
        let b = RecordingSink::shared();
        let config = LoggerConfiguration::builder()
            .route(LogLevel::INFO, vec![a.clone(), b.clone()])
            .route(LogLevel::ALL, vec![a.clone()])
            .build();
        let log = Logger::new(config);

        let calls = Cell::new(0);
        log.info(|| {
            calls.set(calls.get() + 1);
            "hello".to_string()
        })
        .unwrap();

        assert_eq!(calls.get(), 1);
        assert_eq!(a.writes(), 2);
        assert_eq!(b.writes(), 1);
        assert_eq!(b.message().as_deref(), Some("hello"));
    }

    #[test]
    fn message_is_built_once_when_only_a_later_entry_matches() {
        let sink = RecordingSink::shared();
        let config = LoggerConfiguration::builder()
            .route(LogLevel::DEBUG, vec![sink.clone()])
            .route(LogLevel::ERROR, vec![sink.clone()])
            .route(LogLevel::INFO, vec![sink.clone()])
            .route(LogLevel::ERROR | LogLevel::WARN, vec![sink.clone()])
            .build();
        let log = Logger::new(config);

        let calls = Cell::new(0);
        log.error(|| {
            calls.set(calls.get() + 1);
            format!("call {}", calls.get())
        })
        .unwrap();

        assert_eq!(calls.get(), 1);
        assert_eq!(sink.writes(), 2);
        assert_eq!(sink.message().as_deref(), Some("call 1"));
    }

    #[test]
    fn sinks_see_call_level_not_mask() {
        let sink = RecordingSink::shared();
        let log = Logger::new(LoggerConfiguration::from_writers([(
            LogLevel::ALL,
            vec![sink.clone() as Arc<dyn LogSink>],
        )]));

        log.warn(|| "w".into()).unwrap();
        assert_eq!(sink.level(), Some(LogLevel::WARN));
    }

    #[test]
    fn unmatched_level_never_builds_message() {
        let sink = RecordingSink::shared();
        let log = Logger::new(LoggerConfiguration::from_writers([(
            LogLevel::ERROR,
            vec![sink.clone() as Arc<dyn LogSink>],
        )]));

        log.debug(|| panic!("debug message must stay lazy")).unwrap();
        assert!(!log.is_enabled(LogLevel::DEBUG));
        assert_eq!(sink.writes(), 0);
    }

    #[test]
    fn formatters_are_passed_through() {
        let seen: Arc<Mutex<Option<usize>>> = Arc::default();
        let seen_in_sink = Arc::clone(&seen);

        struct ChainLen(Arc<Mutex<Option<usize>>>);
        impl LogSink for ChainLen {
            fn write(
                &self,
                _message: &str,
                _level: LogLevel,
                formatters: Option<&[Arc<dyn LogFormatter>]>,
            ) -> Result<(), SinkError> {
                *self.0.lock().unwrap() = formatters.map(<[_]>::len);
                Ok(())
            }
        }

        let log = Logger::new(
            LoggerConfiguration::builder()
                .route_formatted(
                    LogLevel::EVENT,
                    vec![Arc::new(LevelPrefixFormatter), Arc::new(LevelPrefixFormatter)],
                    vec![Arc::new(ChainLen(seen_in_sink))],
                )
                .build(),
        );

        log.event(|| "boot".into()).unwrap();
        assert_eq!(*seen.lock().unwrap(), Some(2));
    }

    #[test]
    fn first_sink_error_stops_dispatch() {
        let before = RecordingSink::shared();
        let after = RecordingSink::shared();
        let failing = Arc::new(FnSink::new(|_: &str, _: LogLevel| {
            Err(SinkError::Rejected("full".into()))
        }));

        let log = Logger::new(
            LoggerConfiguration::builder()
                .route(LogLevel::ERROR, vec![before.clone(), failing, after.clone()])
                .route(LogLevel::ALL, vec![after.clone()])
                .build(),
        );

        let err = log.error(|| "boom".into()).unwrap_err();
        assert!(matches!(err, SinkError::Rejected(_)));
        assert_eq!(before.writes(), 1);
        assert_eq!(after.writes(), 0);
    }
}
