use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::core::error::AppError;
use crate::features::locations::dtos::{CreateLocationDto, LocationResponseDto, UpdateLocationDto};

/// Categories a location can belong to, stored by ordinal (0-8).
///
/// Serialized as the symbolic name; the ordinal only appears in request
/// payloads and the database column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[repr(i32)]
pub enum LocationCategory {
    Pharmacy = 0,
    Restaurant = 1,
    Hospital = 2,
    Supermarket = 3,
    GasStation = 4,
    School = 5,
    Park = 6,
    Mall = 7,
    Other = 8,
}

impl LocationCategory {
    /// All categories in ordinal order.
    pub const ALL: [LocationCategory; 9] = [
        LocationCategory::Pharmacy,
        LocationCategory::Restaurant,
        LocationCategory::Hospital,
        LocationCategory::Supermarket,
        LocationCategory::GasStation,
        LocationCategory::School,
        LocationCategory::Park,
        LocationCategory::Mall,
        LocationCategory::Other,
    ];

    /// Converts a raw ordinal into a category.
    ///
    /// This is the only way an integer becomes a `LocationCategory`; values
    /// outside 0-8 are rejected here and never reach the data model.
    pub fn from_ordinal(ordinal: i32) -> Option<Self> {
        Self::ALL.get(usize::try_from(ordinal).ok()?).copied()
    }

    #[allow(dead_code)]
    pub fn ordinal(self) -> i32 {
        self as i32
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LocationCategory::Pharmacy => "Pharmacy",
            LocationCategory::Restaurant => "Restaurant",
            LocationCategory::Hospital => "Hospital",
            LocationCategory::Supermarket => "Supermarket",
            LocationCategory::GasStation => "GasStation",
            LocationCategory::School => "School",
            LocationCategory::Park => "Park",
            LocationCategory::Mall => "Mall",
            LocationCategory::Other => "Other",
        }
    }
}

impl std::fmt::Display for LocationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn category_from_ordinal(ordinal: i32) -> Result<LocationCategory, AppError> {
    LocationCategory::from_ordinal(ordinal).ok_or_else(|| {
        AppError::Validation(format!("Category must be between 0 and 8, got {}", ordinal))
    })
}

/// A WGS84 (SRID 4326) point. Both components are always present.
#[derive(Debug, Clone, Copy, PartialEq, FromRow)]
pub struct Coordinate {
    pub longitude: f64,
    pub latitude: f64,
}

/// Database model for a geographic point of interest
#[derive(Debug, Clone, FromRow)]
pub struct Location {
    pub id: i32,
    pub name: String,
    pub category: LocationCategory,
    #[sqlx(flatten)]
    pub coordinate: Coordinate,
}

impl Location {
    /// Replaces name, category and coordinate from an update payload,
    /// keeping the id.
    pub fn merge(&self, dto: &UpdateLocationDto) -> Result<Self, AppError> {
        Ok(Self {
            id: self.id,
            name: dto.name.clone(),
            category: category_from_ordinal(dto.category)?,
            coordinate: Coordinate {
                longitude: dto.longitude,
                latitude: dto.latitude,
            },
        })
    }
}

/// Data for inserting a location; the id is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewLocation {
    pub name: String,
    pub category: LocationCategory,
    pub coordinate: Coordinate,
}

impl TryFrom<&CreateLocationDto> for NewLocation {
    type Error = AppError;

    fn try_from(dto: &CreateLocationDto) -> Result<Self, Self::Error> {
        Ok(Self {
            name: dto.name.clone(),
            category: category_from_ordinal(dto.category)?,
            coordinate: Coordinate {
                longitude: dto.longitude,
                latitude: dto.latitude,
            },
        })
    }
}

impl From<Location> for LocationResponseDto {
    fn from(location: Location) -> Self {
        Self {
            id: location.id,
            name: location.name,
            category: location.category,
            latitude: location.coordinate.latitude,
            longitude: location.coordinate.longitude,
        }
    }
}
