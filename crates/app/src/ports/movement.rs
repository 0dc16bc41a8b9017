//! Movement port — side-effecting derivation of movement events.

use std::future::Future;

use rfid_gateway_domain::error::GatewayError;

/// Runs the database-side movement derivation.
///
/// Implementations must not deduplicate or serialize calls: each invocation
/// triggers one run of the underlying procedure.
pub trait MovementProcedure {
    /// Refresh derived data and load new movement events.
    fn refresh_and_load(&self) -> impl Future<Output = Result<(), GatewayError>> + Send;
}
