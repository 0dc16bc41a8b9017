//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use rfid_gateway_domain::error::GatewayError;

use crate::response::MessageBody;

/// Message returned to clients for every database failure.
pub const DATABASE_ERROR_MESSAGE: &str = "Database error";

/// Maps [`GatewayError`] to an HTTP response, logging the cause under the
/// handler's context.
pub struct ApiError {
    context: &'static str,
    source: GatewayError,
}

impl ApiError {
    /// Attach a log context to an error.
    #[must_use]
    pub fn new(context: &'static str, source: GatewayError) -> Self {
        Self { context, source }
    }

    /// Adapter for `map_err`.
    pub fn context(context: &'static str) -> impl FnOnce(GatewayError) -> Self {
        move |source| Self::new(context, source)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.source {
            GatewayError::DatabaseOperationFailed(_) => {
                tracing::error!(error = %self.source.chain(), "{}", self.context);
                (StatusCode::INTERNAL_SERVER_ERROR, DATABASE_ERROR_MESSAGE)
            }
        };

        (status, Json(MessageBody::failure(message))).into_response()
    }
}
