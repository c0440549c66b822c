use serde::Serialize;

use crate::features::locations::models::{Location, LocationCategory};

/// GeoJSON Point geometry; coordinates are ordered [longitude, latitude]
#[derive(Debug, Clone, Serialize)]
pub struct PointGeometryDto {
    #[serde(rename = "type")]
    pub geometry_type: &'static str,
    pub coordinates: Vec<f64>,
}

/// Properties attached to each exported feature
#[derive(Debug, Clone, Serialize)]
pub struct FeaturePropertiesDto {
    pub id: i32,
    pub name: String,
    pub category: LocationCategory,
}

/// GeoJSON Feature pairing a point geometry with location properties
#[derive(Debug, Clone, Serialize)]
pub struct FeatureDto {
    #[serde(rename = "type")]
    pub feature_type: &'static str,
    pub geometry: PointGeometryDto,
    pub properties: FeaturePropertiesDto,
}

/// GeoJSON FeatureCollection wrapper returned by the export endpoint
#[derive(Debug, Clone, Serialize)]
pub struct FeatureCollectionDto {
    #[serde(rename = "type")]
    pub collection_type: &'static str,
    pub features: Vec<FeatureDto>,
}

impl From<&Location> for FeatureDto {
    fn from(location: &Location) -> Self {
        Self {
            feature_type: "Feature",
            geometry: PointGeometryDto {
                geometry_type: "Point",
                coordinates: vec![location.coordinate.longitude, location.coordinate.latitude],
            },
            properties: FeaturePropertiesDto {
                id: location.id,
                name: location.name.clone(),
                category: location.category,
            },
        }
    }
}

impl FeatureCollectionDto {
    pub fn from_locations(locations: &[Location]) -> Self {
        Self {
            collection_type: "FeatureCollection",
            features: locations.iter().map(FeatureDto::from).collect(),
        }
    }
}
