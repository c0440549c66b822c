use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::locations::models::{Location, NewLocation};

/// Gateway to the durable store for locations.
///
/// Each operation is a single-row effect. Absence is reported as `None` or
/// `false`, never as an error; callers decide what a miss means.
#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// Insert a new location and return it with its store-generated id.
    async fn insert(&self, new_location: NewLocation) -> Result<Location>;

    /// Fetch all locations, ordered by id. An empty table yields an empty vec.
    async fn list_all(&self) -> Result<Vec<Location>>;

    /// Fetch a location by id.
    async fn find_by_id(&self, id: i32) -> Result<Option<Location>>;

    /// Replace name, category and coordinate of the row with `location.id`.
    /// Returns `None` when the row no longer exists.
    async fn update(&self, location: &Location) -> Result<Option<Location>>;

    /// Delete by id. Returns `false` when no row matched.
    async fn delete(&self, id: i32) -> Result<bool>;
}

// The geography column is decomposed into plain doubles on the way out so
// rows decode without a geometry type mapping.
const SELECT_COLUMNS: &str =
    "id, name, category, ST_X(coordinate::geometry) AS longitude, ST_Y(coordinate::geometry) AS latitude";

/// PostgreSQL/PostGIS implementation of the location gateway
pub struct PgLocationRepository {
    pool: PgPool,
}

impl PgLocationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LocationRepository for PgLocationRepository {
    async fn insert(&self, new_location: NewLocation) -> Result<Location> {
        let sql = format!(
            "INSERT INTO locations (name, category, coordinate) \
             VALUES ($1, $2, ST_SetSRID(ST_MakePoint($3, $4), 4326)::geography) \
             RETURNING {SELECT_COLUMNS}"
        );

        sqlx::query_as::<_, Location>(&sql)
            .bind(&new_location.name)
            .bind(new_location.category)
            .bind(new_location.coordinate.longitude)
            .bind(new_location.coordinate.latitude)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert location: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn list_all(&self) -> Result<Vec<Location>> {
        let sql = format!("SELECT {SELECT_COLUMNS} FROM locations ORDER BY id");

        sqlx::query_as::<_, Location>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list locations: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Location>> {
        let sql = format!("SELECT {SELECT_COLUMNS} FROM locations WHERE id = $1");

        sqlx::query_as::<_, Location>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get location by id: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn update(&self, location: &Location) -> Result<Option<Location>> {
        let sql = format!(
            "UPDATE locations \
             SET name = $2, category = $3, \
                 coordinate = ST_SetSRID(ST_MakePoint($4, $5), 4326)::geography \
             WHERE id = $1 \
             RETURNING {SELECT_COLUMNS}"
        );

        sqlx::query_as::<_, Location>(&sql)
            .bind(location.id)
            .bind(&location.name)
            .bind(location.category)
            .bind(location.coordinate.longitude)
            .bind(location.coordinate.latitude)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update location: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM locations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete location: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
