//! HTTP request and response types for a single invocation.
//!
//! # Design
//! These types describe the request and response as plain data. The server
//! crate converts axum's extractors into an `IncomingRequest` and turns the
//! `OutcomeResponse` back into a wire response, so the core never depends on
//! a web framework.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// HTTP methods the trigger binding accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a method name is not one the binding accepts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported HTTP method: {0}")]
pub struct UnsupportedMethod(pub String);

impl FromStr for HttpMethod {
    type Err = UnsupportedMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("GET") {
            Ok(HttpMethod::Get)
        } else if s.eq_ignore_ascii_case("POST") {
            Ok(HttpMethod::Post)
        } else {
            Err(UnsupportedMethod(s.to_string()))
        }
    }
}

/// An inbound request that matched the trigger binding.
///
/// Borrowed by the handler for the duration of one call and never retained.
#[derive(Debug, Clone)]
pub struct IncomingRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl IncomingRequest {
    pub fn new(method: HttpMethod, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Case-insensitive header lookup; returns the first match.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// The response produced for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl OutcomeResponse {
    pub const TEXT_PLAIN: &'static str = "text/plain; charset=utf-8";

    /// `200 OK` with a plaintext body.
    pub fn ok_text(body: &str) -> Self {
        Self {
            status: 200,
            content_type: Self::TEXT_PLAIN,
            body: body.to_string(),
        }
    }
}
