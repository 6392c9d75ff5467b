//! HTTP gateway (Axum) for word combinations.
//!
//! This module is primarily used by the `alembic` server binary.

#![allow(missing_docs)]

pub mod error;
pub mod handler;
pub mod payload;
pub mod state;


use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::HeaderValue},
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub use error::GatewayError;
pub use handler::{combine_handler, starters_handler};
pub use payload::{CombineRequest, StartersResponse};
pub use state::HandlerState;

use crate::cache::{
    ALEMBIC_STATUS_ERROR, ALEMBIC_STATUS_HEADER, ALEMBIC_STATUS_HEALTHY, ALEMBIC_STATUS_NOT_READY,
    ALEMBIC_STATUS_READY,
};
use crate::generation::ConstrainedModel;
use crate::storage::PairStore;

pub fn create_router_with_state<M, S>(state: HandlerState<M, S>) -> Router
where
    M: ConstrainedModel + 'static,
    S: PairStore + 'static,
{
    let request_timeout = state.request_timeout;

    Router::new()
        .route("/", get(starters_handler).post(combine_handler))
        .route("/healthz", get(health_handler))
        .route("/ready", get(ready_handler))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(serde::Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub components: ComponentStatus,
}

#[derive(serde::Serialize)]
pub struct ComponentStatus {
    pub http: &'static str,
    pub storage: &'static str,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        ALEMBIC_STATUS_HEADER,
        HeaderValue::from_static(ALEMBIC_STATUS_HEALTHY),
    );

    (
        StatusCode::OK,
        headers,
        Json(HealthResponse { status: "ok" }),
    )
        .into_response()
}

#[tracing::instrument(skip(state))]
pub async fn ready_handler<M, S>(State(state): State<HandlerState<M, S>>) -> Response
where
    M: ConstrainedModel + 'static,
    S: PairStore + 'static,
{
    let storage_status = if state.resolver.cache().is_ready().await {
        ALEMBIC_STATUS_READY
    } else {
        ALEMBIC_STATUS_ERROR
    };

    let components = ComponentStatus {
        http: ALEMBIC_STATUS_READY,
        storage: storage_status,
    };

    let is_ready = components.storage == ALEMBIC_STATUS_READY;

    let (status_code, status_msg) = if is_ready {
        (StatusCode::OK, ALEMBIC_STATUS_READY)
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, ALEMBIC_STATUS_NOT_READY)
    };

    let mut headers = HeaderMap::new();
    headers.insert(ALEMBIC_STATUS_HEADER, HeaderValue::from_static(status_msg));

    (
        status_code,
        headers,
        Json(ReadyResponse {
            status: if is_ready { "ok" } else { "pending" },
            components,
        }),
    )
        .into_response()
}
