use std::io;

use thiserror::Error;

/// Failure reported by a sink while writing a message.
///
/// The logger never produces one of these itself; it hands the first one it sees
/// back to the caller of the log call and stops dispatching.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The underlying writer failed.
    #[error("sink I/O error: {0}")]
    Io(#[from] io::Error),

    /// The sink refused the message.
    #[error("sink rejected message: {0}")]
    Rejected(String),

    /// A previous writer panicked while holding the sink's lock.
    #[error("sink state poisoned by an earlier panic")]
    Poisoned,
}
