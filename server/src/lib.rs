//! Custom handler process for the `HttpExample` function.
//!
//! The Functions host launches this binary and forwards every HTTP request
//! that matches the trigger binding to it. `app` builds the router for that
//! single binding; `run` and `serve_until` drive it on a listener.

use std::{future::Future, sync::Arc};

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::MethodRouter,
    Router,
};
use http_example_core::{
    HttpMethod, IncomingRequest, OutcomeResponse, RequestHandler, TriggerBinding,
};
use tokio::net::TcpListener;
use uuid::Uuid;

pub mod config;
pub mod telemetry;

pub use config::{Config, ConfigError};

/// Header the host uses to identify an invocation.
pub const INVOCATION_ID_HEADER: &str = "x-azure-functions-invocationid";

#[derive(Clone)]
struct AppState {
    handler: RequestHandler,
    path: Arc<str>,
}

/// Router for the `HttpExample` binding with a `tracing`-backed handler.
pub fn app(config: &Config) -> Router {
    router(&config.route_prefix, RequestHandler::default())
}

/// Registers `handler` on the binding's path for the binding's methods only.
///
/// The path matches case-insensitively, as it does on the host. Other methods
/// on that path get `405`, other paths `404`. Request bodies are not size
/// limited; the host already caps them.
pub fn router(route_prefix: &str, handler: RequestHandler) -> Router {
    let binding = TriggerBinding::http_example();
    let path = binding.path(route_prefix);
    let methods = binding
        .methods
        .iter()
        .fold(MethodRouter::<AppState>::new(), |methods, method| match method {
            HttpMethod::Get => methods.get(invoke),
            HttpMethod::Post => methods.post(invoke),
        });

    Router::new()
        .route(&path, methods)
        .fallback(invoke_case_insensitive)
        .layer(DefaultBodyLimit::disable())
        .with_state(AppState {
            handler,
            path: path.into(),
        })
}

pub async fn run(listener: TcpListener, config: &Config) -> Result<(), std::io::Error> {
    axum::serve(listener, app(config)).await
}

/// Serves `router` until `shutdown` resolves, then drains in-flight requests.
pub async fn serve_until<F>(
    listener: TcpListener,
    router: Router,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router).with_graceful_shutdown(shutdown).await
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received ctrl-c"),
        _ = terminate => tracing::info!("received SIGTERM"),
    }
}

/// Serves case variants of the bound path, e.g. `/api/httpexample`.
async fn invoke_case_insensitive(
    state: State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if !uri.path().eq_ignore_ascii_case(&state.path) {
        return StatusCode::NOT_FOUND.into_response();
    }
    invoke(state, method, uri, headers, body).await
}

async fn invoke(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    // axum routes HEAD through the GET handler and strips the body itself.
    let method = if method == Method::HEAD {
        HttpMethod::Get
    } else {
        match method.as_str().parse::<HttpMethod>() {
            Ok(method) => method,
            Err(err) => {
                tracing::debug!(error = %err, "method reached handler outside binding");
                return StatusCode::METHOD_NOT_ALLOWED.into_response();
            }
        }
    };

    let request = IncomingRequest {
        method,
        path: uri.path().to_string(),
        headers: headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect(),
        body: body.to_vec(),
    };

    let invocation_id = request
        .header(INVOCATION_ID_HEADER)
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let span = tracing::info_span!(
        "invocation",
        id = %invocation_id,
        method = %request.method,
        path = %request.path
    );

    into_response(span.in_scope(|| state.handler.handle(&request)))
}

fn into_response(outcome: OutcomeResponse) -> Response {
    let status =
        StatusCode::from_u16(outcome.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, [(header::CONTENT_TYPE, outcome.content_type)], outcome.body).into_response()
}
