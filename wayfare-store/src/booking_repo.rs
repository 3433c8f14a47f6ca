use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use wayfare_core::models::Booking;
use wayfare_core::repository::BookingRepository;
use wayfare_core::StoreError;

use crate::database::map_db_err;

pub struct PgBookingRepository {
    pool: PgPool,
}

impl PgBookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct BookingRow {
    id: Uuid,
    owner_email: String,
    kind: String,
    details: Value,
    created_at: DateTime<Utc>,
}

impl From<BookingRow> for Booking {
    fn from(row: BookingRow) -> Self {
        Booking {
            id: row.id,
            owner_email: row.owner_email,
            kind: row.kind,
            details: row.details,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl BookingRepository for PgBookingRepository {
    async fn create(
        &self,
        owner_email: &str,
        kind: &str,
        details: &Value,
    ) -> Result<Booking, StoreError> {
        let id = Uuid::new_v4();
        let created_at = Utc::now();

        sqlx::query(
            "INSERT INTO bookings (id, owner_email, kind, details, created_at) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(id)
        .bind(owner_email)
        .bind(kind)
        .bind(details)
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_err)?;

        Ok(Booking {
            id,
            owner_email: owner_email.to_string(),
            kind: kind.to_string(),
            details: details.clone(),
            created_at,
        })
    }

    async fn list_by_owner(&self, owner_email: &str) -> Result<Vec<Booking>, StoreError> {
        let rows = sqlx::query_as::<_, BookingRow>(
            "SELECT id, owner_email, kind, details, created_at FROM bookings WHERE owner_email = $1 ORDER BY created_at DESC",
        )
        .bind(owner_email)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Booking::from).collect())
    }

    async fn delete_by_owner_and_id(
        &self,
        owner_email: &str,
        id: Uuid,
    ) -> Result<bool, StoreError> {
        // Both id and owner must match. Zero rows affected covers "not
        // found" and "not yours" alike; callers cannot tell them apart.
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1 AND owner_email = $2")
            .bind(id)
            .bind(owner_email)
            .execute(&self.pool)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected() == 1)
    }
}
