//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the database.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod movement;
pub mod occupancy;

pub use movement::MovementProcedure;
pub use occupancy::OccupancyRepository;
