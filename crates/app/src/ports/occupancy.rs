//! Occupancy port — read access to the zone occupancy view.

use std::future::Future;

use rfid_gateway_domain::error::GatewayError;
use rfid_gateway_domain::occupancy::OccupancyRow;

/// Source of [`OccupancyRow`]s.
pub trait OccupancyRepository {
    /// Return every row of the view, in the order the source yields them.
    fn get_all(&self) -> impl Future<Output = Result<Vec<OccupancyRow>, GatewayError>> + Send;
}
