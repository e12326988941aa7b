pub mod log_formatter;
pub mod log_level;
pub mod log_macros;
pub mod log_sink;
pub mod logger;
pub mod logger_configuration;
pub mod noop_log_sink;
pub mod recording_sink;
pub mod sink_error;
pub mod stream_sink;

pub use log_level::LogLevel;
pub use log_sink::LogSink;
pub use logger::Logger;
pub use logger_configuration::LoggerConfiguration;
pub use noop_log_sink::NoopLogSink;
pub use sink_error::SinkError;
