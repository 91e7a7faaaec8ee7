//! Health record row type.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::schemas::{HealthRecordMetadata, HealthRecordType};

/// A timestamped health event for one pet.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthRecord {
    pub id: Uuid,
    pub pet_id: Uuid,
    #[serde(rename = "type")]
    pub record_type: HealthRecordType,
    pub title: String,
    pub date: DateTime<Utc>,
    pub notes: Option<String>,
    pub metadata: Option<Json<HealthRecordMetadata>>,
    pub created_at: DateTime<Utc>,
}

impl HealthRecord {
    /// All records for one pet, most recent event first. Callers verify pet
    /// ownership before asking.
    pub async fn for_pet(pool: &PgPool, pet_id: Uuid) -> Result<Vec<HealthRecord>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM health_records WHERE pet_id = $1 ORDER BY date DESC")
            .bind(pet_id)
            .fetch_all(pool)
            .await
    }
}
