use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::locations::dtos::{CreateLocationDto, LocationResponseDto, UpdateLocationDto};
use crate::features::locations::services::LocationService;

/// Create a new location
#[utoipa::path(
    post,
    path = "/locations",
    request_body = CreateLocationDto,
    responses(
        (status = 201, description = "Location created successfully", body = LocationResponseDto),
        (status = 400, description = "Validation error")
    ),
    tag = "locations"
)]
pub async fn create_location(
    State(service): State<Arc<LocationService>>,
    AppJson(dto): AppJson<CreateLocationDto>,
) -> Result<impl IntoResponse> {
    let location = service.create(dto).await?;
    let location_uri = format!("/locations/{}", location.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location_uri)],
        Json(location),
    ))
}

/// List all locations
#[utoipa::path(
    get,
    path = "/locations",
    responses(
        (status = 200, description = "All registered locations", body = Vec<LocationResponseDto>)
    ),
    tag = "locations"
)]
pub async fn list_locations(
    State(service): State<Arc<LocationService>>,
) -> Result<Json<Vec<LocationResponseDto>>> {
    let locations = service.list().await?;
    Ok(Json(locations))
}

/// Export all locations as a GeoJSON FeatureCollection
#[utoipa::path(
    get,
    path = "/locations/geojson",
    responses(
        (status = 200, description = "GeoJSON FeatureCollection of all locations")
    ),
    tag = "locations"
)]
pub async fn export_geojson(
    State(service): State<Arc<LocationService>>,
) -> Result<impl IntoResponse> {
    let collection = service.export_geojson().await?;

    Ok((
        [(header::CONTENT_TYPE, "application/geo+json")],
        Json(collection),
    ))
}

/// Get a location by id
#[utoipa::path(
    get,
    path = "/locations/{id}",
    params(
        ("id" = i32, Path, description = "Location id")
    ),
    responses(
        (status = 200, description = "Location found", body = LocationResponseDto),
        (status = 404, description = "Location not found")
    ),
    tag = "locations"
)]
pub async fn get_location(
    State(service): State<Arc<LocationService>>,
    Path(id): Path<i32>,
) -> Result<Json<LocationResponseDto>> {
    let location = service.get_by_id(id).await?;
    Ok(Json(location))
}

/// Update an existing location
#[utoipa::path(
    put,
    path = "/locations/{id}",
    params(
        ("id" = i32, Path, description = "Location id")
    ),
    request_body = UpdateLocationDto,
    responses(
        (status = 200, description = "Location updated successfully", body = LocationResponseDto),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Location not found")
    ),
    tag = "locations"
)]
pub async fn update_location(
    State(service): State<Arc<LocationService>>,
    Path(id): Path<i32>,
    AppJson(dto): AppJson<UpdateLocationDto>,
) -> Result<Json<LocationResponseDto>> {
    let location = service.update(id, dto).await?;
    Ok(Json(location))
}

/// Delete a location by id
#[utoipa::path(
    delete,
    path = "/locations/{id}",
    params(
        ("id" = i32, Path, description = "Location id")
    ),
    responses(
        (status = 204, description = "Location deleted successfully"),
        (status = 404, description = "Location not found")
    ),
    tag = "locations"
)]
pub async fn delete_location(
    State(service): State<Arc<LocationService>>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
