//! Error types for the logging capability.
//!
//! The handler itself has no error path; the only locally observable failure
//! is a sink that cannot accept a record, and the handler swallows it.

/// Errors a `LogSink` may report.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The sink cannot accept records right now.
    #[error("log sink unavailable: {0}")]
    Unavailable(String),

    /// Writing the record failed part-way.
    #[error("log write failed: {0}")]
    Io(#[from] std::io::Error),
}
