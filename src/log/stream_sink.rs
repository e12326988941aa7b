use std::{
    fs::{self, File, OpenOptions},
    io::{self, Stderr, Stdout, Write},
    path::Path,
    sync::{Arc, Mutex},
};

use crate::log::{
    log_formatter::{LogFormatter, apply_formatters},
    log_level::LogLevel,
    log_sink::LogSink,
    sink_error::SinkError,
};

/// Writes one line per message to any [`Write`] target.
///
/// The entry's formatter chain is applied before writing. The writer is flushed after
/// every line, so a crash never loses already-dispatched messages.
///
/// # Example
///
/// ```rust,ignore
/// let console = StreamSink::stdout();
/// let file = StreamSink::append_to("logs/app.log")?;
/// ```
pub struct StreamSink<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> StreamSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Gives the writer back, e.g. to inspect an in-memory buffer.
    ///
    /// # Errors
    /// Returns [`SinkError::Poisoned`] if a writer panicked while holding the lock.
    pub fn into_inner(self) -> Result<W, SinkError> {
        self.out.into_inner().map_err(|_| SinkError::Poisoned)
    }
}

impl StreamSink<Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl StreamSink<Stderr> {
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl StreamSink<File> {
    /// Opens `path` for appending, creating the file and any missing parent directories.
    ///
    /// # Errors
    /// Returns [`SinkError::Io`] if the directory or file cannot be created.
    pub fn append_to<P: AsRef<Path>>(path: P) -> Result<Self, SinkError> {
        let path = path.as_ref();
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(file))
    }
}

impl<W: Write + Send> LogSink for StreamSink<W> {
    fn write(
        &self,
        message: &str,
        level: LogLevel,
        formatters: Option<&[Arc<dyn LogFormatter>]>,
    ) -> Result<(), SinkError> {
        let line = match formatters {
            Some(chain) => apply_formatters(message, level, chain),
            None => message.to_owned(),
        };

        let mut out = self.out.lock().map_err(|_| SinkError::Poisoned)?;
        writeln!(out, "{line}")?;
        out.flush()?;
        Ok(())
    }
}
