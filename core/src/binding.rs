//! Trigger binding for the `HttpExample` function.
//!
//! # Design
//! The host maps HTTP requests to this function through `function.json`.
//! `TriggerBinding` is the in-process description of that mapping: the
//! server registers exactly `path()` with the accepted methods, and
//! `to_function_json()` renders the document the host reads, so both sides
//! come from one value.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::http::HttpMethod;

/// Authorization level the host enforces before invoking the function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthLevel {
    Anonymous,
    Function,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerBinding {
    pub function_name: String,
    pub auth_level: AuthLevel,
    pub methods: Vec<HttpMethod>,
    /// Route template relative to the route prefix. `None` uses the function name.
    pub route: Option<String>,
}

impl TriggerBinding {
    /// The binding of the `HttpExample` function: anonymous GET and POST.
    pub fn http_example() -> Self {
        Self {
            function_name: "HttpExample".to_string(),
            auth_level: AuthLevel::Anonymous,
            methods: vec![HttpMethod::Get, HttpMethod::Post],
            route: None,
        }
    }

    /// Absolute request path under `route_prefix`.
    ///
    /// An empty prefix binds the route directly below the root.
    pub fn path(&self, route_prefix: &str) -> String {
        let route = self
            .route
            .as_deref()
            .unwrap_or(&self.function_name)
            .trim_matches('/');
        let prefix = route_prefix.trim_matches('/');
        if prefix.is_empty() {
            format!("/{route}")
        } else {
            format!("/{prefix}/{route}")
        }
    }

    pub fn accepts(&self, method: HttpMethod) -> bool {
        self.methods.contains(&method)
    }

    /// Renders the host's `function.json` for this binding.
    pub fn to_function_json(&self) -> Value {
        let mut trigger = json!({
            "authLevel": self.auth_level,
            "type": "httpTrigger",
            "direction": "in",
            "name": "req",
            "methods": self.methods,
        });
        if let Some(route) = &self.route {
            trigger["route"] = Value::String(route.clone());
        }
        json!({
            "bindings": [
                trigger,
                { "type": "http", "direction": "out", "name": "res" },
            ]
        })
    }
}
