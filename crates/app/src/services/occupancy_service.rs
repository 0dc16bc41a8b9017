//! Occupancy service — use-case for reading current zone occupancy.

use rfid_gateway_domain::error::GatewayError;
use rfid_gateway_domain::occupancy::OccupancyRow;

use crate::ports::OccupancyRepository;

/// Application service exposing the zone occupancy view.
pub struct OccupancyService<R> {
    repo: R,
}

impl<R: OccupancyRepository> OccupancyService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all occupancy rows, unfiltered and in source order.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::DatabaseOperationFailed`] propagated from the
    /// repository.
    pub async fn list_zone_occupancy(&self) -> Result<Vec<OccupancyRow>, GatewayError> {
        let rows = self.repo.get_all().await?;
        tracing::debug!(rows = rows.len(), "loaded zone occupancy");
        Ok(rows)
    }
}
