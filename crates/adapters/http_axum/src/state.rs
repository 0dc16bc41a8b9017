//! Shared application state for axum handlers.

use std::sync::Arc;

use rfid_gateway_app::ports::{MovementProcedure, OccupancyRepository};
use rfid_gateway_app::services::movement_service::MovementService;
use rfid_gateway_app::services::occupancy_service::OccupancyService;

/// Application state shared across all axum handlers.
///
/// Generic over the occupancy repository and movement procedure to avoid
/// dynamic dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<OR, MP> {
    /// Zone occupancy reads.
    pub occupancy_service: Arc<OccupancyService<OR>>,
    /// Movement derivation trigger.
    pub movement_service: Arc<MovementService<MP>>,
}

impl<OR, MP> Clone for AppState<OR, MP> {
    fn clone(&self) -> Self {
        Self {
            occupancy_service: Arc::clone(&self.occupancy_service),
            movement_service: Arc::clone(&self.movement_service),
        }
    }
}

impl<OR, MP> AppState<OR, MP>
where
    OR: OccupancyRepository + Send + Sync + 'static,
    MP: MovementProcedure + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        occupancy_service: OccupancyService<OR>,
        movement_service: MovementService<MP>,
    ) -> Self {
        Self {
            occupancy_service: Arc::new(occupancy_service),
            movement_service: Arc::new(movement_service),
        }
    }
}
