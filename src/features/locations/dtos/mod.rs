pub mod geojson_dto;
pub mod location_dto;

pub use geojson_dto::*;
pub use location_dto::*;
