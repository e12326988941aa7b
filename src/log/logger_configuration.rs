use std::{collections::HashMap, fmt, sync::Arc};

use crate::{
    config::{Config, ConfigError, LOGGING_SECTION},
    log::{log_formatter::LogFormatter, log_level::LogLevel, log_sink::LogSink},
};

/// One row of the routing table: every event whose level intersects `mask` is
/// written to each sink in `sinks`, in order.
#[derive(Clone)]
pub struct RoutingEntry {
    mask: LogLevel,
    sinks: Vec<Arc<dyn LogSink>>,
    formatters: Option<Vec<Arc<dyn LogFormatter>>>,
}

impl RoutingEntry {
    #[must_use]
    pub fn new(mask: LogLevel, sinks: Vec<Arc<dyn LogSink>>) -> Self {
        Self {
            mask,
            sinks,
            formatters: None,
        }
    }

    #[must_use]
    pub fn with_formatters(mut self, formatters: Vec<Arc<dyn LogFormatter>>) -> Self {
        self.formatters = Some(formatters);
        self
    }

    #[must_use]
    pub fn mask(&self) -> LogLevel {
        self.mask
    }

    #[must_use]
    pub fn sinks(&self) -> &[Arc<dyn LogSink>] {
        &self.sinks
    }

    #[must_use]
    pub fn formatters(&self) -> Option<&[Arc<dyn LogFormatter>]> {
        self.formatters.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn matches(&self, level: LogLevel) -> bool {
        self.mask.intersects(level)
    }
}

impl fmt::Debug for RoutingEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoutingEntry")
            .field("mask", &format_args!("{:#x}", self.mask.raw()))
            .field("sinks", &self.sinks.len())
            .field("formatters", &self.formatters.as_ref().map(Vec::len))
            .finish()
    }
}

/// Ordered, immutable routing table used by a [`Logger`](crate::log::logger::Logger).
///
/// Entries may overlap: a sink listed in two matching entries receives the message
/// twice. Build one with [`LoggerConfiguration::builder`], [`LoggerConfiguration::from_writers`]
/// or [`LoggerConfiguration::from_config`].
#[derive(Clone, Debug, Default)]
pub struct LoggerConfiguration {
    entries: Vec<RoutingEntry>,
}

impl LoggerConfiguration {
    /// Takes ownership of `entries`, keeping their order.
    ///
    /// Entries without sinks are dropped: they could never deliver anything but would
    /// still force the message to be built. Entries with an `Off` mask are legal and
    /// kept, although they never match.
    #[must_use]
    pub fn new(entries: Vec<RoutingEntry>) -> Self {
        let entries = entries
            .into_iter()
            .filter(|entry| {
                if entry.sinks.is_empty() {
                    tracing::warn!(
                        mask = entry.mask.raw(),
                        "dropping routing entry without sinks"
                    );
                    return false;
                }
                if entry.mask.is_off() {
                    tracing::debug!(
                        sinks = entry.sinks.len(),
                        "routing entry with Off mask will never match"
                    );
                }
                true
            })
            .collect();
        Self { entries }
    }

    /// Builds one entry per `(mask, sinks)` pair, in iteration order.
    ///
    /// ```
    /// use std::sync::Arc;
    /// use routelog::log::{
    ///     log_level::LogLevel, log_sink::LogSink, logger_configuration::LoggerConfiguration,
    ///     recording_sink::RecordingSink,
    /// };
    ///
    /// let sink: Arc<dyn LogSink> = RecordingSink::shared();
    /// let config = LoggerConfiguration::from_writers([(LogLevel::ALL, vec![sink])]);
    /// assert_eq!(config.len(), 1);
    /// ```
    pub fn from_writers<I>(writers: I) -> Self
    where
        I: IntoIterator<Item = (LogLevel, Vec<Arc<dyn LogSink>>)>,
    {
        Self::new(
            writers
                .into_iter()
                .map(|(mask, sinks)| RoutingEntry::new(mask, sinks))
                .collect(),
        )
    }

    /// Builds the table from the `[Logging]` section of `config`.
    ///
    /// Each key names a sink in `sinks`; its value is a level expression such as
    /// `"Warn | Error"`. Entries are created in key order.
    ///
    /// # Errors
    /// * [`ConfigError::UnknownSink`] if a key has no matching sink.
    /// * [`ConfigError::InvalidLevel`] if a value is not a valid level expression.
    pub fn from_config(
        config: &Config,
        sinks: &HashMap<String, Arc<dyn LogSink>>,
    ) -> Result<Self, ConfigError> {
        let mut builder = Self::builder();
        for (name, expr) in config.section(LOGGING_SECTION) {
            let sink = sinks
                .get(name)
                .ok_or_else(|| ConfigError::UnknownSink(name.to_string()))?;
            let mask = expr
                .parse::<LogLevel>()
                .map_err(|source| ConfigError::InvalidLevel {
                    sink: name.to_string(),
                    source,
                })?;
            tracing::debug!(sink = name, mask = mask.raw(), "configured log route");
            builder = builder.route(mask, vec![Arc::clone(sink)]);
        }
        Ok(builder.build())
    }

    #[must_use]
    pub fn builder() -> LoggerConfigurationBuilder {
        LoggerConfigurationBuilder::default()
    }

    #[must_use]
    pub fn entries(&self) -> &[RoutingEntry] {
        &self.entries
    }

    /// True if at least one entry would receive an event at `level`.
    #[must_use]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        self.entries.iter().any(|entry| entry.matches(level))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Default)]
pub struct LoggerConfigurationBuilder {
    entries: Vec<RoutingEntry>,
}

impl LoggerConfigurationBuilder {
    #[must_use]
    pub fn route(mut self, mask: LogLevel, sinks: Vec<Arc<dyn LogSink>>) -> Self {
        self.entries.push(RoutingEntry::new(mask, sinks));
        self
    }

    #[must_use]
    pub fn route_formatted(
        mut self,
        mask: LogLevel,
        formatters: Vec<Arc<dyn LogFormatter>>,
        sinks: Vec<Arc<dyn LogSink>>,
    ) -> Self {
        self.entries.push(RoutingEntry::new(mask, sinks).with_formatters(formatters));
        self
    }

    #[must_use]
    pub fn build(self) -> LoggerConfiguration {
        LoggerConfiguration::new(self.entries)
    }
}
