//! JSON REST handler for zone occupancy.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use rfid_gateway_app::ports::{MovementProcedure, OccupancyRepository};
use rfid_gateway_domain::occupancy::OccupancyRow;

use crate::error::ApiError;
use crate::response::DataBody;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<DataBody<Vec<OccupancyRow>>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/zone-occupancy`
pub async fn list<OR, MP>(
    State(state): State<AppState<OR, MP>>,
) -> Result<ListResponse, ApiError>
where
    OR: OccupancyRepository + Send + Sync + 'static,
    MP: MovementProcedure + Send + Sync + 'static,
{
    let rows = state
        .occupancy_service
        .list_zone_occupancy()
        .await
        .map_err(ApiError::context("error fetching occupancy"))?;
    Ok(ListResponse::Ok(Json(DataBody::success(rows))))
}
