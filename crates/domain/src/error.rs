//! Common error types used across the workspace.
//!
//! Every failure reaching the application boundary is a database failure.
//! Adapters keep their own typed errors and convert them into
//! [`GatewayError`] through `From`.

/// Boxed source error carried by [`GatewayError`].
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Top-level error for the gateway operations.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// A connection, query, procedure call or row decoding failed.
    #[error("database operation failed")]
    DatabaseOperationFailed(#[source] BoxedError),
}

impl GatewayError {
    /// Wrap any error as a database failure.
    pub fn database<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::DatabaseOperationFailed(Box::new(err))
    }

    /// Render the error followed by its whole source chain, `: `-separated.
    ///
    /// Used for server-side diagnostics only; never sent to clients.
    #[must_use]
    pub fn chain(&self) -> String {
        let mut out = self.to_string();
        let mut current = std::error::Error::source(self);
        while let Some(err) = current {
            out.push_str(": ");
            out.push_str(&err.to_string());
            current = err.source();
        }
        out
    }
}
