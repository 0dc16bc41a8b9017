//! # rfid-gateway-domain
//!
//! Pure domain model for the RFID zone gateway.
//!
//! ## Responsibilities
//! - Define **occupancy rows** (opaque column → value records produced by the
//!   database's zone occupancy view)
//! - Define the error convention shared by every layer of the workspace
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod occupancy;
