//! HTTP transport.
//!
//! Serves the JSKOS API: every lookup answers a JSON array of concepts. The total
//! number of results is sent in `X-Total-Count` when known.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::ServiceError;
use crate::models::{ConceptQuery, Page};
use crate::service::OrcidService;

/// Header carrying the total number of results.
pub const TOTAL_COUNT_HEADER: &str = "X-Total-Count";

/// Shared state for HTTP handlers.
pub struct HttpState {
    pub service: OrcidService,
    /// Answer 502 on upstream faults instead of an empty result.
    pub surface_upstream_errors: bool,
    /// Whether the token cache is enabled (reported by `/ready`).
    pub caches_tokens: bool,
}

/// JSKOS API error body.
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    pub code: u16,
    pub error: String,
    pub message: String,
}

/// Create the HTTP router.
pub fn create_router(
    service: OrcidService,
    surface_upstream_errors: bool,
    caches_tokens: bool,
) -> Router {
    let state = Arc::new(HttpState {
        service,
        surface_upstream_errors,
        caches_tokens,
    });

    Router::new()
        .route("/", get(handle_query))
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/{*path}", get(handle_path_query))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "orcid-jskos",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn readiness_check(State(state): State<Arc<HttpState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ready",
        "service": "orcid-jskos",
        "version": env!("CARGO_PKG_VERSION"),
        "credentials": state.service.has_credentials(),
        "tokenCache": state.caches_tokens,
        "uriSpace": state.service.uri_space().base()
    }))
}

/// Handle `GET /?notation=...` and `GET /?search=...`.
async fn handle_query(
    State(state): State<Arc<HttpState>>,
    query: Result<Query<ConceptQuery>, QueryRejection>,
) -> Response {
    match query {
        Ok(Query(query)) => answer(&state, &query).await,
        Err(rejection) => bad_request(&rejection),
    }
}

/// Handle `GET /{identifier}`.
async fn handle_path_query(
    State(state): State<Arc<HttpState>>,
    Path(path): Path<String>,
    query: Result<Query<ConceptQuery>, QueryRejection>,
) -> Response {
    match query {
        Ok(Query(query)) => answer(&state, &query.with_path(path)).await,
        Err(rejection) => bad_request(&rejection),
    }
}

async fn answer(state: &HttpState, query: &ConceptQuery) -> Response {
    tracing::debug!(?query, "Handling JSKOS query");

    if state.surface_upstream_errors {
        match state.service.try_query(query).await {
            Ok(page) => page_response(page),
            Err(e) => error_response(&e),
        }
    } else {
        page_response(state.service.query(query).await)
    }
}

fn page_response(page: Page) -> Response {
    let total = page.total;
    let mut response = Json(page.concepts).into_response();

    if let Some(total) = total {
        response
            .headers_mut()
            .insert(TOTAL_COUNT_HEADER, HeaderValue::from(total));
    }

    response
}

fn error_response(err: &ServiceError) -> Response {
    tracing::error!(error = %err, "Upstream failure");

    let body = ApiError {
        code: StatusCode::BAD_GATEWAY.as_u16(),
        error: "upstream unavailable".to_string(),
        message: err.to_user_message(),
    };

    (StatusCode::BAD_GATEWAY, Json(body)).into_response()
}

/// Query strings that do not deserialize, e.g. a repeated `notation`.
fn bad_request(rejection: &QueryRejection) -> Response {
    tracing::debug!(error = %rejection, "Rejected query string");

    let body = ApiError {
        code: StatusCode::BAD_REQUEST.as_u16(),
        error: "invalid query".to_string(),
        message: rejection.body_text(),
    };

    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}
