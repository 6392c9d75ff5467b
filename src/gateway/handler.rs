use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{debug, instrument};

use crate::cache::ALEMBIC_STATUS_HEADER;
use crate::constants::STARTER_PAIRS;
use crate::gateway::error::GatewayError;
use crate::gateway::payload::{CombineRequest, StartersResponse};
use crate::gateway::state::HandlerState;
use crate::generation::ConstrainedModel;
use crate::resolver::Resolution;
use crate::storage::PairStore;

/// `POST /`: combines two words.
#[instrument(skip(state, payload))]
pub async fn combine_handler<M, S>(
    State(state): State<HandlerState<M, S>>,
    payload: Result<Json<CombineRequest>, JsonRejection>,
) -> Result<Response, GatewayError>
where
    M: ConstrainedModel + 'static,
    S: PairStore + 'static,
{
    let Json(request) = payload.map_err(|e| GatewayError::InvalidRequest(e.body_text()))?;
    let (first, second) = required_words(&request)?;

    let resolution = state.resolver.resolve(first, second).await?;
    debug!(status = %resolution.status, "Combination served");

    Ok(make_response(resolution))
}

/// `GET /`: resolves the starter combinations one after another.
#[instrument(skip(state))]
pub async fn starters_handler<M, S>(
    State(state): State<HandlerState<M, S>>,
) -> Result<Json<StartersResponse>, GatewayError>
where
    M: ConstrainedModel + 'static,
    S: PairStore + 'static,
{
    let mut starters = StartersResponse::new();

    for (first, second) in STARTER_PAIRS {
        let resolution = state.resolver.resolve(first, second).await?;
        starters.insert(format!("{first} + {second}"), resolution.result);
    }

    Ok(Json(starters))
}

pub(crate) fn required_words(request: &CombineRequest) -> Result<(&str, &str), GatewayError> {
    Ok((
        required_word("first", request.first.as_deref())?,
        required_word("second", request.second.as_deref())?,
    ))
}

fn required_word<'a>(field: &str, value: Option<&'a str>) -> Result<&'a str, GatewayError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(GatewayError::InvalidRequest(format!(
            "'{field}' must be a non-empty string"
        ))),
    }
}

pub(crate) fn make_response(resolution: Resolution) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        ALEMBIC_STATUS_HEADER,
        HeaderValue::from_static(resolution.status.as_header_value()),
    );

    (StatusCode::OK, headers, Json(resolution.result)).into_response()
}
