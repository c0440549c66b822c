use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::locations::models::LocationCategory;

/// Request DTO for creating a location
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLocationDto {
    /// Display name of the location
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    /// Category ordinal (0=Pharmacy, 1=Restaurant, 2=Hospital, 3=Supermarket,
    /// 4=GasStation, 5=School, 6=Park, 7=Mall, 8=Other)
    #[validate(range(min = 0, max = 8, message = "Category must be between 0 and 8"))]
    pub category: i32,

    /// Latitude in degrees
    #[validate(range(
        min = -90.0,
        max = 90.0,
        message = "Latitude must be between -90 and 90"
    ))]
    pub latitude: f64,

    /// Longitude in degrees
    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "Longitude must be between -180 and 180"
    ))]
    pub longitude: f64,
}

/// Request DTO for replacing a location's fields; the id is immutable
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLocationDto {
    /// Display name of the location
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    /// Category ordinal (0-8, same values as on create)
    #[validate(range(min = 0, max = 8, message = "Category must be between 0 and 8"))]
    pub category: i32,

    /// Latitude in degrees
    #[validate(range(
        min = -90.0,
        max = 90.0,
        message = "Latitude must be between -90 and 90"
    ))]
    pub latitude: f64,

    /// Longitude in degrees
    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "Longitude must be between -180 and 180"
    ))]
    pub longitude: f64,
}

/// Response DTO for a location
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocationResponseDto {
    pub id: i32,
    pub name: String,
    /// Category rendered as its symbolic name
    pub category: LocationCategory,
    pub latitude: f64,
    pub longitude: f64,
}
