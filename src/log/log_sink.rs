use std::sync::Arc;

use crate::log::{
    log_formatter::{LogFormatter, apply_formatters},
    log_level::LogLevel,
    sink_error::SinkError,
};

/// Destination for routed log messages.
///
/// `write` receives the message produced for the current log call, the level that was
/// passed to that call (not the subscription mask that matched), and the formatter
/// chain of the matching routing entry. Whether the chain is applied is up to the sink.
pub trait LogSink: Send + Sync {
    fn write(
        &self,
        message: &str,
        level: LogLevel,
        formatters: Option<&[Arc<dyn LogFormatter>]>,
    ) -> Result<(), SinkError>;
}

/// Adapts a closure into a [`LogSink`].
///
/// The entry's formatters are applied before the closure sees the message.
///
/// ```
/// use routelog::log::{log_level::LogLevel, log_sink::{FnSink, LogSink}};
///
/// let sink = FnSink::new(|msg: &str, level: LogLevel| {
///     eprintln!("{level}: {msg}");
///     Ok(())
/// });
/// sink.write("hello", LogLevel::INFO, None).unwrap();
/// ```
pub struct FnSink<F> {
    f: F,
}

impl<F> FnSink<F>
where
    F: Fn(&str, LogLevel) -> Result<(), SinkError> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> LogSink for FnSink<F>
where
    F: Fn(&str, LogLevel) -> Result<(), SinkError> + Send + Sync,
{
    fn write(
        &self,
        message: &str,
        level: LogLevel,
        formatters: Option<&[Arc<dyn LogFormatter>]>,
    ) -> Result<(), SinkError> {
        match formatters {
            Some(chain) if !chain.is_empty() => {
                (self.f)(&apply_formatters(message, level, chain), level)
            }
            _ => (self.f)(message, level),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use crate::log::log_formatter::LevelPrefixFormatter;
    use std::sync::Mutex;

    #[test]
    fn fn_sink_applies_formatters_before_calling_closure() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_in_sink = Arc::clone(&seen);
        let sink = FnSink::new(move |msg: &str, _level: LogLevel| {
            seen_in_sink.lock().unwrap().push(msg.to_string());
            Ok(())
        });

        let chain: Vec<Arc<dyn LogFormatter>> = vec![Arc::new(LevelPrefixFormatter)];
        sink.write("plain", LogLevel::INFO, None).unwrap();
        sink.write("prefixed", LogLevel::WARN, Some(chain.as_slice())).unwrap();

        assert_eq!(*seen.lock().unwrap(), vec!["plain", "[Warn] prefixed"]);
    }

    #[test]
    fn fn_sink_errors_are_returned() {
        let sink = FnSink::new(|_: &str, _: LogLevel| Err(SinkError::Rejected("nope".into())));
        let err = sink.write("x", LogLevel::ERROR, None).unwrap_err();
        assert!(matches!(err, SinkError::Rejected(ref r) if r == "nope"));
    }
}
