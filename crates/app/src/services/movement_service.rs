//! Movement service — use-case for triggering movement derivation.

use rfid_gateway_domain::error::GatewayError;

use crate::ports::MovementProcedure;

/// Application service triggering the movement derivation procedure.
pub struct MovementService<P> {
    procedure: P,
}

impl<P: MovementProcedure> MovementService<P> {
    /// Create a new service backed by the given procedure.
    pub fn new(procedure: P) -> Self {
        Self { procedure }
    }

    /// Run the derivation once. Concurrent callers each trigger their own run.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::DatabaseOperationFailed`] propagated from the
    /// procedure.
    pub async fn derive_movements(&self) -> Result<(), GatewayError> {
        self.procedure.refresh_and_load().await?;
        tracing::debug!("movement derivation completed");
        Ok(())
    }
}
