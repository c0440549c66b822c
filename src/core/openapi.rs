use utoipa::{Modify, OpenApi};

use crate::features::locations::dtos as locations_dtos;
use crate::features::locations::handlers as locations_handlers;
use crate::features::locations::models as locations_models;

#[derive(OpenApi)]
#[openapi(
    paths(
        locations_handlers::create_location,
        locations_handlers::list_locations,
        locations_handlers::export_geojson,
        locations_handlers::get_location,
        locations_handlers::update_location,
        locations_handlers::delete_location,
    ),
    components(
        schemas(
            locations_models::LocationCategory,
            locations_dtos::CreateLocationDto,
            locations_dtos::UpdateLocationDto,
            locations_dtos::LocationResponseDto,
        )
    ),
    tags(
        (name = "locations", description = "Geographic points of interest")
    ),
    info(
        title = "GeoLocations API",
        version = "0.1.0",
        description = "REST API for managing geographic points of interest",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
