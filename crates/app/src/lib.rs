//! # rfid-gateway-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `OccupancyRepository` — read the zone occupancy view
//!   - `MovementProcedure` — run the movement derivation procedure
//! - Define **driving/inbound ports** as use-case structs:
//!   - `OccupancyService` — list current zone occupancy
//!   - `MovementService` — trigger movement derivation
//!
//! ## Dependency rule
//! Depends on `rfid-gateway-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
