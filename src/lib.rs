//! Routelog routes log messages to output sinks by level bitmask.
//!
//! A [`LogLevel`](log::log_level::LogLevel) is a `u32` bit set, so callers can
//! combine the built-in levels and define their own from unused bits. A
//! [`Logger`](log::logger::Logger) holds an ordered table of
//! `(subscription mask -> sinks)` entries and writes each message to every entry
//! whose mask intersects the event level. The message itself is built lazily and
//! only when at least one entry matches.
//!
//! ```
//! use std::sync::Arc;
//! use routelog::log::{
//!     log_level::LogLevel, log_sink::LogSink, logger::Logger,
//!     logger_configuration::LoggerConfiguration, recording_sink::RecordingSink,
//! };
//!
//! let sink = RecordingSink::shared();
//! let log = Logger::new(LoggerConfiguration::from_writers([(
//!     LogLevel::WARN | LogLevel::ERROR,
//!     vec![sink.clone() as Arc<dyn LogSink>],
//! )]));
//!
//! log.info(|| "ignored".into()).unwrap();
//! log.warn(|| format!("{} retries left", 2)).unwrap();
//! assert_eq!(sink.message().as_deref(), Some("2 retries left"));
//! ```

/// Handles configuration loading and management.
pub mod config;
/// Level algebra, sinks, formatters and the dispatching logger.
pub mod log;
