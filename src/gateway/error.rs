use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::cache::ALEMBIC_STATUS_HEADER;
use crate::generation::ModelError;
use crate::resolver::ResolveError;
use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("model error: {0}")]
    Model(#[from] ModelError),

    #[error("internal error: {0}")]
    InternalError(String),
}

impl From<ResolveError> for GatewayError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::InvalidInput(e) => GatewayError::InvalidRequest(e.to_string()),
            ResolveError::Storage(e) => GatewayError::Storage(e),
            ResolveError::Model(e) => GatewayError::Model(e),
            ResolveError::TaskFailed(msg) => GatewayError::InternalError(msg),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GatewayError::Model(_) => StatusCode::BAD_GATEWAY,
            GatewayError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn alembic_status(&self) -> &'static str {
        match self {
            GatewayError::InvalidRequest(_) => "invalid_request",
            GatewayError::Storage(_) => "storage_error",
            GatewayError::Model(ModelError::MalformedOutput { .. }) => "malformed_output",
            GatewayError::Model(_) => "provider_error",
            GatewayError::InternalError(_) => "internal_error",
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let mut headers = HeaderMap::new();
        headers.insert(
            ALEMBIC_STATUS_HEADER,
            HeaderValue::from_static(self.alembic_status()),
        );

        if status.is_server_error() {
            tracing::error!(error = %self, code = status.as_u16(), "Request failed");
        }

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
        });

        (status, headers, body).into_response()
    }
}
