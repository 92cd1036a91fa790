//! HTTP Surface
//!
//! axum router exposing the dispatcher under [`API_PREFIX`]:
//!
//! | Route | Handler |
//! |-------|---------|
//! | `GET /api/health` | liveness probe |
//! | `GET /api/themes/{theme_id}/files` | file listing |
//! | `GET /api/themes/{theme_id}/files/{*path}` | raw delivery |
//! | `GET /api/themes/{theme_id}/preview/{*path}` | preview delivery |
//!
//! Failures are JSON envelopes (`{"success":false,"error":"…"}`). Store
//! failures are logged and reported as a generic 500.
//!
//! The store port is synchronous, so every dispatcher call runs on the
//! blocking pool and never stalls a runtime worker.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use axum::extract::{Path, Request, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::application::{ContentDispatcher, Delivery, DeliveryMode, DispatchError};
use crate::domain::entities::FileSummary;
use crate::domain::services::API_PREFIX;
use crate::domain::value_objects::ThemeId;

type SharedDispatcher = Arc<ContentDispatcher>;

/// JSON envelope shared by every JSON response.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct Health {
    status: &'static str,
    version: &'static str,
}

/// Build the application router.
pub fn router(dispatcher: ContentDispatcher) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .route("/themes/{theme_id}/files", get(list_files))
        .route("/themes/{theme_id}/files/{*path}", get(raw_file))
        .route("/themes/{theme_id}/preview/{*path}", get(preview_file));

    Router::new()
        .nest(API_PREFIX, api)
        .fallback(unknown_route)
        .layer(middleware::from_fn(log_request))
        .with_state(Arc::new(dispatcher))
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(dispatcher: ContentDispatcher, addr: SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!(
        addr = %listener.local_addr()?,
        max_age_secs = dispatcher.cache().max_age_secs(),
        "swatch listening"
    );

    axum::serve(listener, router(dispatcher))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("swatch stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "cannot listen for Ctrl-C; shutting down");
        return;
    }
    tracing::info!("shutdown requested");
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        %method,
        uri = %uri,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request"
    );
    response
}

async fn health() -> Json<ApiResponse<Health>> {
    Json(ApiResponse::success(Health {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    }))
}

async fn list_files(
    State(dispatcher): State<SharedDispatcher>,
    Path(theme_id): Path<String>,
) -> Response {
    let theme_id = ThemeId::new(theme_id);
    match run_blocking(move || dispatcher.list_files(&theme_id)).await {
        Ok(files) => Json(ApiResponse::<Vec<FileSummary>>::success(files)).into_response(),
        Err(response) => response,
    }
}

async fn raw_file(
    State(dispatcher): State<SharedDispatcher>,
    Path((theme_id, path)): Path<(String, String)>,
    headers: HeaderMap,
) -> Response {
    deliver(dispatcher, DeliveryMode::Raw, theme_id, path, &headers).await
}

async fn preview_file(
    State(dispatcher): State<SharedDispatcher>,
    Path((theme_id, path)): Path<(String, String)>,
    headers: HeaderMap,
) -> Response {
    deliver(dispatcher, DeliveryMode::Preview, theme_id, path, &headers).await
}

async fn unknown_route() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<()>::error("Not found")),
    )
        .into_response()
}

async fn deliver(
    dispatcher: SharedDispatcher,
    mode: DeliveryMode,
    theme_id: String,
    path: String,
    request_headers: &HeaderMap,
) -> Response {
    let theme_id = ThemeId::new(theme_id);
    match run_blocking(move || dispatcher.dispatch(mode, &theme_id, &path)).await {
        Ok(delivery) => delivery_response(delivery, request_headers),
        Err(response) => response,
    }
}

/// Run a dispatcher call on the blocking pool, mapping failures to responses.
async fn run_blocking<T, F>(call: F) -> Result<T, Response>
where
    F: FnOnce() -> Result<T, DispatchError> + Send + 'static,
    T: Send + 'static,
{
    match tokio::task::spawn_blocking(call).await {
        Ok(result) => result.map_err(error_response),
        Err(e) => {
            tracing::error!(error = %e, "dispatch task failed");
            Err(internal_error())
        }
    }
}

fn delivery_response(delivery: Delivery, request_headers: &HeaderMap) -> Response {
    let not_modified = request_headers
        .get(header::IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| delivery.etag.matches_if_none_match(v));

    if not_modified {
        let headers = [
            (header::CACHE_CONTROL, delivery.cache.header_value()),
            (header::ETAG, delivery.etag.etag()),
        ];
        return (StatusCode::NOT_MODIFIED, headers).into_response();
    }

    let headers = [
        (header::CONTENT_TYPE, delivery.content_type.header_value()),
        (header::CACHE_CONTROL, delivery.cache.header_value()),
        (header::ETAG, delivery.etag.etag()),
    ];
    (StatusCode::OK, headers, delivery.body).into_response()
}

fn error_response(err: DispatchError) -> Response {
    let (status, message) = match &err {
        DispatchError::NotFound { .. } => (StatusCode::NOT_FOUND, "File not found"),
        DispatchError::ThemeNotFound { .. } => (StatusCode::NOT_FOUND, "Theme not found"),
        DispatchError::StoreUnavailable(e) => {
            tracing::error!(error = %e, "request failed");
            return internal_error();
        }
    };

    (status, Json(ApiResponse::<()>::error(message))).into_response()
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::<()>::error("Internal server error")),
    )
        .into_response()
}
