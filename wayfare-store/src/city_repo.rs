use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use wayfare_core::models::City;
use wayfare_core::repository::CityRepository;
use wayfare_core::StoreError;

use crate::database::map_db_err;

/// Read-only catalog. Cities are seeded by migration; the application never
/// writes to this table.
pub struct PgCityRepository {
    pool: PgPool,
}

impl PgCityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CityRow {
    id: Uuid,
    city_name: String,
    hotspots: Value,
}

fn row_to_city(row: CityRow) -> Result<City, StoreError> {
    let hotspots = serde_json::from_value(row.hotspots)
        .map_err(|e| StoreError::Unavailable(format!("malformed hotspots payload: {}", e)))?;

    Ok(City {
        id: row.id,
        city_name: row.city_name,
        hotspots,
    })
}

#[async_trait]
impl CityRepository for PgCityRepository {
    async fn list_all(&self) -> Result<Vec<City>, StoreError> {
        let rows = sqlx::query_as::<_, CityRow>(
            "SELECT id, city_name, hotspots FROM cities ORDER BY city_name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_err)?;

        rows.into_iter().map(row_to_city).collect()
    }

    async fn search_by_name(&self, fragment: &str) -> Result<Vec<City>, StoreError> {
        // ILIKE with the fragment anywhere in the name; LIKE wildcards in
        // user input are escaped so they match literally.
        let pattern = format!("%{}%", escape_like(fragment));

        let rows = sqlx::query_as::<_, CityRow>(
            "SELECT id, city_name, hotspots FROM cities WHERE city_name ILIKE $1 ORDER BY city_name",
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_err)?;

        rows.into_iter().map(row_to_city).collect()
    }
}

fn escape_like(fragment: &str) -> String {
    fragment
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
