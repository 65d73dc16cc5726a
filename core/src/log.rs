//! The logging capability handed to `RequestHandler` at construction.

use crate::error::LogError;

/// Records informational messages.
///
/// Implementations must be shareable across threads because one handler
/// serves every concurrent invocation.
pub trait LogSink: Send + Sync {
    fn info(&self, message: &str) -> Result<(), LogError>;
}

/// Forwards records to the `tracing` dispatcher as INFO events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn info(&self, message: &str) -> Result<(), LogError> {
        tracing::info!("{message}");
        Ok(())
    }
}

/// Discards every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl LogSink for NullSink {
    fn info(&self, _message: &str) -> Result<(), LogError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_sinks_never_fail() {
        assert!(TracingSink.info("hello").is_ok());
        assert!(NullSink.info("hello").is_ok());
    }

    #[test]
    fn sinks_are_object_safe() {
        let sinks: Vec<Box<dyn LogSink>> = vec![Box::new(TracingSink), Box::new(NullSink)];
        for sink in &sinks {
            sink.info("boxed").unwrap();
        }
    }
}
