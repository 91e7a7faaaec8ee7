//! Health record operations.

use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use super::validated;
use crate::error::{ActionError, ActionResult};
use crate::models::{HealthRecord, Pet};
use crate::schemas::{DeleteHealthRecord, NewHealthRecord};

/// Log a health event against a pet the caller owns.
///
/// The insert selects its `pet_id` from an ownership-scoped subquery, so the
/// check and the write are one statement: zero rows back means the pet does
/// not exist or is not the caller's.
pub async fn create_health_record(
    pool: &PgPool,
    user_id: Uuid,
    input: NewHealthRecord,
) -> ActionResult<HealthRecord> {
    validated(input, |input| async move {
        sqlx::query_as(
            r#"
            INSERT INTO health_records (pet_id, record_type, title, date, notes, metadata)
            SELECT p.id, $3, $4, $5, $6, $7
            FROM pets p
            WHERE p.id = $1 AND p.user_id = $2
            RETURNING *
            "#,
        )
        .bind(input.pet_id)
        .bind(user_id)
        .bind(input.record_type)
        .bind(input.title.trim())
        .bind(input.date)
        .bind(&input.notes)
        .bind(input.metadata.map(Json))
        .fetch_optional(pool)
        .await
        .map_err(|e| ActionError::db("Failed to create health record.", e))?
        .ok_or_else(ActionError::pet_not_found)
    })
    .await
}

/// Delete a health record from a pet the caller owns.
///
/// Ownership is checked against the pet first (its absence gets the fixed
/// not-found message), and the delete itself is still scoped by `pet_id`, so
/// a record id belonging to someone else's pet never matches.
pub async fn delete_health_record(
    pool: &PgPool,
    user_id: Uuid,
    input: DeleteHealthRecord,
) -> ActionResult<()> {
    let pet = Pet::find_owned(pool, input.pet_id, user_id)
        .await
        .map_err(|e| ActionError::db("Failed to delete health record", e))?
        .ok_or_else(ActionError::pet_not_found)?;

    let result = sqlx::query("DELETE FROM health_records WHERE id = $1 AND pet_id = $2")
        .bind(input.id)
        .bind(pet.id)
        .execute(pool)
        .await
        .map_err(|e| ActionError::db("Failed to delete health record", e))?;

    if result.rows_affected() == 0 {
        return Err(ActionError::NotFound("Health record not found".to_string()));
    }
    Ok(())
}

/// A pet's health timeline, most recent first.
pub async fn list_health_records(
    pool: &PgPool,
    user_id: Uuid,
    pet_id: Uuid,
) -> ActionResult<Vec<HealthRecord>> {
    let pet = Pet::find_owned(pool, pet_id, user_id)
        .await
        .map_err(|e| ActionError::db("Failed to load health records", e))?
        .ok_or_else(ActionError::pet_not_found)?;

    HealthRecord::for_pet(pool, pet.id)
        .await
        .map_err(|e| ActionError::db("Failed to load health records", e))
}
