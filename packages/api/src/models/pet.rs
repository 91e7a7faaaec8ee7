//! Pet row type and ownership-scoped lookups.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::schemas::{Gender, Species};

/// A pet as stored in the `pets` table. Serialized whole in API responses;
/// nothing here is secret.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub species: Species,
    pub breed: Option<String>,
    pub gender: Gender,
    pub is_neutered: bool,
    pub birth_date: Option<NaiveDate>,
    /// Current weight in kilograms.
    pub weight: Option<f64>,
    pub photo_url: Option<String>,
    pub allergies: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Pet {
    /// Load a pet only if it belongs to `user_id`. The ownership predicate is
    /// part of the query; a foreign pet is indistinguishable from a missing one.
    pub async fn find_owned(
        pool: &PgPool,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Pet>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM pets WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// All pets belonging to `user_id`, newest first.
    pub async fn for_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<Pet>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM pets WHERE user_id = $1 ORDER BY created_at DESC")
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
