//! # rfid-gateway-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON API:
//!   - `GET  /api/zone-occupancy`  — current zone occupancy rows
//!   - `POST /api/derive-movements` — trigger movement derivation
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into the `{ success, data | message }` envelope
//! - Turn every failure into a uniform `500` without leaking its cause
//!
//! ## Dependency rule
//! Depends on `rfid-gateway-app` (for port traits and services) and
//! `rfid-gateway-domain` (for domain types used in response mapping). Never
//! leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod response;
pub mod router;
pub mod state;
