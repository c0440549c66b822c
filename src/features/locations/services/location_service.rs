use std::sync::Arc;

use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::locations::dtos::{
    CreateLocationDto, FeatureCollectionDto, LocationResponseDto, UpdateLocationDto,
};
use crate::features::locations::models::NewLocation;
use crate::features::locations::repositories::LocationRepository;

/// Service for managing geographic locations; the sole entry point the
/// HTTP surface uses. Validation always runs before any persistence call.
pub struct LocationService {
    repository: Arc<dyn LocationRepository>,
}

impl LocationService {
    pub fn new(repository: Arc<dyn LocationRepository>) -> Self {
        Self { repository }
    }

    /// Create a new location
    pub async fn create(&self, dto: CreateLocationDto) -> Result<LocationResponseDto> {
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let new_location = NewLocation::try_from(&dto)?;
        let location = self.repository.insert(new_location).await?;

        tracing::info!("Location created: id={}, name={}", location.id, location.name);

        Ok(location.into())
    }

    /// List all locations
    pub async fn list(&self) -> Result<Vec<LocationResponseDto>> {
        let locations = self.repository.list_all().await?;
        Ok(locations.into_iter().map(Into::into).collect())
    }

    /// Export all locations as a GeoJSON FeatureCollection
    pub async fn export_geojson(&self) -> Result<FeatureCollectionDto> {
        let locations = self.repository.list_all().await?;
        Ok(FeatureCollectionDto::from_locations(&locations))
    }

    /// Get a location by id
    pub async fn get_by_id(&self, id: i32) -> Result<LocationResponseDto> {
        let location = self.repository.find_by_id(id).await?;

        location
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound(format!("Location '{}' not found", id)))
    }

    /// Replace name, category and coordinate of an existing location
    pub async fn update(&self, id: i32, dto: UpdateLocationDto) -> Result<LocationResponseDto> {
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Location '{}' not found", id)))?;

        let merged = existing.merge(&dto)?;
        let updated = self
            .repository
            .update(&merged)
            .await?
            // The row can vanish between the fetch and the write; same outcome as a miss.
            .ok_or_else(|| AppError::NotFound(format!("Location '{}' not found", id)))?;

        tracing::info!("Location updated: id={}", updated.id);

        Ok(updated.into())
    }

    /// Delete a location by id
    pub async fn delete(&self, id: i32) -> Result<()> {
        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(AppError::NotFound(format!("Location '{}' not found", id)));
        }

        tracing::info!("Location deleted: id={}", id);

        Ok(())
    }
}
