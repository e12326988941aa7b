use std::sync::Arc;

use crate::log::{
    log_formatter::LogFormatter, log_level::LogLevel, log_sink::LogSink, sink_error::SinkError,
};

#[derive(Debug, Clone, Default)]
pub struct NoopLogSink;

impl LogSink for NoopLogSink {
    #[inline]
    fn write(
        &self,
        _message: &str,
        _level: LogLevel,
        _formatters: Option<&[Arc<dyn LogFormatter>]>,
    ) -> Result<(), SinkError> {
        Ok(())
    }
}
