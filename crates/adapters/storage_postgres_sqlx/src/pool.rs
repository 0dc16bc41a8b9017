//! `PostgreSQL` connection settings and pool construction.

use std::fmt;

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

use crate::error::StorageError;

/// Password used when none is configured. Development convenience only:
/// production deployments must override it.
pub const DEFAULT_PASSWORD: &str = "postgres";

const PING: &str = "SELECT NOW()";

/// Connection settings, read once at startup and never reloaded.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Database user.
    pub user: String,
    /// Server host name or address.
    pub host: String,
    /// Database name.
    pub database: String,
    /// Password for `user`.
    pub password: String,
    /// Server TCP port.
    pub port: u16,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            user: "postgres".to_string(),
            host: "localhost".to_string(),
            database: "rfid_db".to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            port: 5432,
        }
    }
}

impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("user", &self.user)
            .field("host", &self.host)
            .field("database", &self.database)
            .field("password", &"<redacted>")
            .field("port", &self.port)
            .finish()
    }
}

impl ConnectionConfig {
    /// Whether the password is still the built-in development default.
    #[must_use]
    pub fn uses_default_password(&self) -> bool {
        self.password == DEFAULT_PASSWORD
    }

    /// Translate into sqlx connection options.
    #[must_use]
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }

    /// Build a [`Database`] with sqlx's default pool settings.
    ///
    /// No connection is opened here: the pool connects on first use, so the
    /// process can start while the database is unreachable.
    #[must_use]
    pub fn build(self) -> Database {
        self.build_with(PgPoolOptions::new())
    }

    /// Build a [`Database`] with explicit pool options.
    #[must_use]
    pub fn build_with(self, options: PgPoolOptions) -> Database {
        let pool = options.connect_lazy_with(self.connect_options());
        Database { pool }
    }
}

/// Holds the process-wide connection pool. Clones share the same pool.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Borrow the underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Round-trip to the server and return its current time.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Database`] if no connection can be acquired or
    /// the query fails.
    pub async fn ping(&self) -> Result<DateTime<Utc>, StorageError> {
        let (now,): (DateTime<Utc>,) = sqlx::query_as(PING).fetch_one(&self.pool).await?;
        Ok(now)
    }
}
