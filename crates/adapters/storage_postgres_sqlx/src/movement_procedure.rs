//! `PostgreSQL` implementation of [`MovementProcedure`].

use std::future::Future;

use sqlx::PgPool;

use rfid_gateway_app::ports::MovementProcedure;
use rfid_gateway_domain::error::GatewayError;

use crate::error::StorageError;

const CALL_REFRESH_AND_LOAD_MOVEMENTS: &str = "SELECT rfid.refresh_and_load_movements()";

/// Calls `rfid.refresh_and_load_movements()`; the function's result is
/// discarded. Sent unprepared, like the view read, so a redefined function
/// never trips over a cached plan.
pub struct PgMovementProcedure {
    pool: PgPool,
}

impl PgMovementProcedure {
    /// Create a new procedure handle using the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl MovementProcedure for PgMovementProcedure {
    fn refresh_and_load(&self) -> impl Future<Output = Result<(), GatewayError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::raw_sql(CALL_REFRESH_AND_LOAD_MOVEMENTS)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}
