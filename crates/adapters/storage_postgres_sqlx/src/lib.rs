//! # rfid-gateway-adapter-storage-postgres-sqlx
//!
//! `PostgreSQL` adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the port traits defined in `rfid-gateway-app::ports`
//! - Own the process-wide connection pool (connected lazily on first use)
//! - Issue the two fixed statements of the database contract verbatim
//! - Map arbitrary result rows into domain [`OccupancyRow`]s
//!
//! ## Dependency rule
//! Depends on `rfid-gateway-app` (for port traits) and `rfid-gateway-domain`
//! (for domain types). The `app` and `domain` crates must never reference
//! this adapter.
//!
//! [`OccupancyRow`]: rfid_gateway_domain::occupancy::OccupancyRow

pub mod error;
pub mod movement_procedure;
pub mod occupancy_repo;
pub mod pool;
mod row;

pub use movement_procedure::PgMovementProcedure;
pub use occupancy_repo::PgOccupancyRepository;
pub use pool::{ConnectionConfig, Database};
