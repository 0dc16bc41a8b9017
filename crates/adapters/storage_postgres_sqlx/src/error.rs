//! Storage-specific error type wrapping sqlx errors.

use rfid_gateway_domain::error::GatewayError;

/// Errors originating from the `PostgreSQL` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A connection, query or procedure call failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// A result column could not be converted to JSON.
    #[error("failed to decode column `{column}` of type {type_name}")]
    Decode {
        /// Column name as reported by the server.
        column: String,
        /// `PostgreSQL` type name of the column.
        type_name: String,
        /// Underlying decoding failure.
        #[source]
        source: sqlx::Error,
    },
}

impl From<StorageError> for GatewayError {
    fn from(err: StorageError) -> Self {
        Self::database(err)
    }
}
