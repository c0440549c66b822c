pub mod location_repository;

#[cfg(test)]
pub mod memory;

pub use location_repository::{LocationRepository, PgLocationRepository};
