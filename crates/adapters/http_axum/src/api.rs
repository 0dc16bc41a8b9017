//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod movements;
#[allow(clippy::missing_errors_doc)]
pub mod occupancy;

use axum::Router;
use axum::routing::{get, post};

use rfid_gateway_app::ports::{MovementProcedure, OccupancyRepository};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<OR, MP>() -> Router<AppState<OR, MP>>
where
    OR: OccupancyRepository + Send + Sync + 'static,
    MP: MovementProcedure + Send + Sync + 'static,
{
    Router::new()
        .route("/zone-occupancy", get(occupancy::list::<OR, MP>))
        .route("/derive-movements", post(movements::derive::<OR, MP>))
}
