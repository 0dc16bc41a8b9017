//! `PostgreSQL` implementation of [`OccupancyRepository`].

use std::future::Future;

use sqlx::PgPool;

use rfid_gateway_app::ports::OccupancyRepository;
use rfid_gateway_domain::error::GatewayError;
use rfid_gateway_domain::occupancy::OccupancyRow;

use crate::error::StorageError;
use crate::row::decode_row;

const SELECT_ZONE_OCCUPANCY: &str = "SELECT * FROM rfid.v_zone_occupancy";

/// `PostgreSQL`-backed reader of the `rfid.v_zone_occupancy` view.
///
/// The view is owned outside the gateway and may be redefined at any time, so
/// the query goes over the simple query protocol: nothing is prepared or
/// cached per connection, and values arrive as text.
pub struct PgOccupancyRepository {
    pool: PgPool,
}

impl PgOccupancyRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl OccupancyRepository for PgOccupancyRepository {
    fn get_all(&self) -> impl Future<Output = Result<Vec<OccupancyRow>, GatewayError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows = sqlx::raw_sql(SELECT_ZONE_OCCUPANCY)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            let decoded = rows
                .iter()
                .map(decode_row)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(decoded)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sqlx::postgres::PgPoolOptions;

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -- --ignored
    // They replace `rfid.v_zone_occupancy`; never point them at production.

    #[tokio::test]
    #[ignore = "requires database"]
    async fn should_read_view_rows_verbatim() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = PgPool::connect(&url).await.expect("pool creation failed");

        sqlx::raw_sql(
            "CREATE SCHEMA IF NOT EXISTS rfid; \
             DROP VIEW IF EXISTS rfid.v_zone_occupancy; \
             CREATE VIEW rfid.v_zone_occupancy AS \
             SELECT * FROM (VALUES ('A'::text, 3::int8), ('B'::text, 0::int8)) AS t(zone, count)",
        )
        .execute(&pool)
        .await
        .expect("fixture setup failed");

        let repo = PgOccupancyRepository::new(pool);
        let rows = repo.get_all().await.expect("query failed");

        let value = serde_json::to_value(&rows).unwrap();
        assert_eq!(
            value,
            json!([{"zone": "A", "count": 3}, {"zone": "B", "count": 0}])
        );
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn should_follow_view_redefinition_on_same_connection() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect(&url)
            .await
            .expect("pool creation failed");

        sqlx::raw_sql(
            "CREATE SCHEMA IF NOT EXISTS rfid; \
             DROP VIEW IF EXISTS rfid.v_zone_occupancy; \
             CREATE VIEW rfid.v_zone_occupancy AS SELECT 'A'::text AS zone, 3::int8 AS count",
        )
        .execute(&pool)
        .await
        .expect("fixture setup failed");

        let repo = PgOccupancyRepository::new(pool.clone());
        let before = repo.get_all().await.expect("first read failed");
        assert_eq!(
            serde_json::to_value(&before).unwrap(),
            json!([{"zone": "A", "count": 3}])
        );

        sqlx::raw_sql(
            "CREATE OR REPLACE VIEW rfid.v_zone_occupancy AS \
             SELECT 'A'::text AS zone, 3::int8 AS count, true AS active",
        )
        .execute(&pool)
        .await
        .expect("view redefinition failed");

        for _ in 0..3 {
            let after = repo.get_all().await.expect("read after redefinition failed");
            assert_eq!(
                serde_json::to_value(&after).unwrap(),
                json!([{"zone": "A", "count": 3, "active": true}])
            );
        }
    }
}
