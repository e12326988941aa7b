use std::sync::{Arc, Mutex, MutexGuard};

use crate::log::{
    log_formatter::LogFormatter, log_level::LogLevel, log_sink::LogSink, sink_error::SinkError,
};

/// In-memory sink that remembers the last write and counts writes.
///
/// Formatters are ignored; the raw message is recorded.
#[derive(Debug, Default)]
pub struct RecordingSink {
    state: Mutex<Recorded>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recorded {
    pub message: Option<String>,
    pub level: Option<LogLevel>,
    pub writes: usize,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience for the common case of sharing one sink between a configuration
    /// and the code that inspects it.
    #[must_use]
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    #[must_use]
    pub fn message(&self) -> Option<String> {
        self.lock().message.clone()
    }

    #[must_use]
    pub fn level(&self) -> Option<LogLevel> {
        self.lock().level
    }

    #[must_use]
    pub fn writes(&self) -> usize {
        self.lock().writes
    }

    #[must_use]
    pub fn snapshot(&self) -> Recorded {
        self.lock().clone()
    }

    // A panic in another writer cannot leave `Recorded` half-updated, so the
    // poisoned guard is still safe to read.
    fn lock(&self) -> MutexGuard<'_, Recorded> {
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl LogSink for RecordingSink {
    fn write(
        &self,
        message: &str,
        level: LogLevel,
        _formatters: Option<&[Arc<dyn LogFormatter>]>,
    ) -> Result<(), SinkError> {
        let mut state = self.lock();
        state.message = Some(message.to_owned());
        state.level = Some(level);
        state.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn starts_empty() {
        let sink = RecordingSink::new();
        assert_eq!(sink.snapshot(), Recorded::default());
    }

    #[test]
    fn records_last_message_and_counts() {
        let sink = RecordingSink::new();
        sink.write("first", LogLevel::INFO, None).unwrap();
        sink.write("second", LogLevel::WARN, None).unwrap();

        assert_eq!(sink.message().as_deref(), Some("second"));
        assert_eq!(sink.level(), Some(LogLevel::WARN));
        assert_eq!(sink.writes(), 2);
    }
}
