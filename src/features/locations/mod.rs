//! Geographic locations feature: CRUD operations and GeoJSON export.
//!
//! Locations are points of interest (name, category, WGS84 coordinate)
//! persisted in PostgreSQL with PostGIS.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/locations` | Create a location |
//! | GET | `/locations` | List all locations |
//! | GET | `/locations/geojson` | Export all locations as a GeoJSON FeatureCollection |
//! | GET | `/locations/{id}` | Get a location by id |
//! | PUT | `/locations/{id}` | Update a location |
//! | DELETE | `/locations/{id}` | Delete a location |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgLocationRepository;
pub use services::LocationService;
