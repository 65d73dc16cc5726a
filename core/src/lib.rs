//! Request handling core for the `HttpExample` function.
//!
//! # Overview
//! Turns an `IncomingRequest` into an `OutcomeResponse` without touching the
//! network. The server crate owns the socket and the router; this crate owns
//! what happens once a request has matched the trigger binding.
//!
//! # Design
//! - `RequestHandler` is stateless apart from its injected `LogSink`, so one
//!   instance is shared by every concurrent invocation.
//! - `TriggerBinding` describes the route the host registers and can render
//!   itself as the host's `function.json`.

pub mod binding;
pub mod error;
pub mod handler;
pub mod http;
pub mod log;

pub use binding::{AuthLevel, TriggerBinding};
pub use error::LogError;
pub use handler::{RequestHandler, LOG_MESSAGE, WELCOME_MESSAGE};
pub use http::{HttpMethod, IncomingRequest, OutcomeResponse, UnsupportedMethod};
pub use log::{LogSink, NullSink, TracingSink};
