//! JSON REST handler for movement derivation.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use rfid_gateway_app::ports::{MovementProcedure, OccupancyRepository};

use crate::error::ApiError;
use crate::response::MessageBody;
use crate::state::AppState;

/// Message returned after a successful derivation run.
pub const DERIVED_MESSAGE: &str = "Movements derived successfully";

/// Possible responses from the derive endpoint.
pub enum DeriveResponse {
    Ok(Json<MessageBody>),
}

impl IntoResponse for DeriveResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /api/derive-movements`
pub async fn derive<OR, MP>(
    State(state): State<AppState<OR, MP>>,
) -> Result<DeriveResponse, ApiError>
where
    OR: OccupancyRepository + Send + Sync + 'static,
    MP: MovementProcedure + Send + Sync + 'static,
{
    state
        .movement_service
        .derive_movements()
        .await
        .map_err(ApiError::context("error deriving movements"))?;
    Ok(DeriveResponse::Ok(Json(MessageBody::success(DERIVED_MESSAGE))))
}
