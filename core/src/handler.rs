//! The `HttpExample` request handler.
//!
//! # Design
//! `RequestHandler` holds only its `LogSink` and carries no state between
//! calls. Every invocation writes one log record and returns the same
//! plaintext `200 OK`; a sink failure is dropped so it can never change the
//! response.

use std::fmt;
use std::sync::Arc;

use crate::http::{IncomingRequest, OutcomeResponse};
use crate::log::{LogSink, TracingSink};

/// Record written once per invocation.
pub const LOG_MESSAGE: &str = "HTTP trigger function processed a request.";

/// Body of every successful response.
pub const WELCOME_MESSAGE: &str = "Welcome to Azure Functions!";

/// Stateless, reentrant handler for the `HttpExample` trigger.
///
/// Cloning is cheap; clones share the same sink.
#[derive(Clone)]
pub struct RequestHandler {
    sink: Arc<dyn LogSink>,
}

impl RequestHandler {
    pub fn new(sink: impl LogSink + 'static) -> Self {
        Self { sink: Arc::new(sink) }
    }

    /// Builds a handler around an already shared sink.
    pub fn with_shared_sink(sink: Arc<dyn LogSink>) -> Self {
        Self { sink }
    }

    /// Handles one invocation. Never fails.
    ///
    /// The request's method, headers and body do not influence the result.
    pub fn handle(&self, request: &IncomingRequest) -> OutcomeResponse {
        if let Err(err) = self.sink.info(LOG_MESSAGE) {
            tracing::debug!(error = %err, path = %request.path, "dropped invocation log record");
        }
        OutcomeResponse::ok_text(WELCOME_MESSAGE)
    }
}

impl Default for RequestHandler {
    fn default() -> Self {
        Self::new(TracingSink)
    }
}

impl fmt::Debug for RequestHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestHandler").finish_non_exhaustive()
    }
}
