//! Pet CRUD. Every mutation's SQL carries the ownership predicate
//! (`user_id = $n`), so there is no window between an ownership check and
//! the write it guards.

use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use super::dashboard::{weight_series, WeightEntry};
use super::validated;
use crate::error::{ActionError, ActionResult};
use crate::models::{HealthRecord, Pet};
use crate::schemas::{NewPet, UpdatePetWeight};

/// A pet with its health timeline and derived weight series, as shown on the
/// pet detail page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PetDetail {
    #[serde(flatten)]
    pub pet: Pet,
    pub health_records: Vec<HealthRecord>,
    pub weight_series: Vec<WeightEntry>,
}

/// Register a pet owned by `user_id`.
pub async fn create_pet(pool: &PgPool, user_id: Uuid, input: NewPet) -> ActionResult<Pet> {
    validated(input, |input| async move {
        sqlx::query_as(
            r#"
            INSERT INTO pets
                (user_id, name, species, breed, gender, is_neutered,
                 birth_date, weight, photo_url, allergies)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(input.name.trim())
        .bind(input.species)
        .bind(&input.breed)
        .bind(input.gender)
        .bind(input.is_neutered)
        .bind(input.birth_date)
        .bind(input.weight)
        .bind(&input.photo_url)
        .bind(&input.allergies)
        .fetch_one(pool)
        .await
        .map_err(|e| ActionError::db("Failed to create pet", e))
    })
    .await
}

/// The caller's pets, newest first.
pub async fn list_pets(pool: &PgPool, user_id: Uuid) -> ActionResult<Vec<Pet>> {
    Pet::for_user(pool, user_id)
        .await
        .map_err(|e| ActionError::db("Failed to load pets", e))
}

/// One pet with records (date descending) and the weight series.
pub async fn get_pet(pool: &PgPool, user_id: Uuid, pet_id: Uuid) -> ActionResult<PetDetail> {
    let pet = Pet::find_owned(pool, pet_id, user_id)
        .await
        .map_err(|e| ActionError::db("Failed to load pet", e))?
        .ok_or_else(ActionError::pet_not_found)?;

    let health_records = HealthRecord::for_pet(pool, pet.id)
        .await
        .map_err(|e| ActionError::db("Failed to load health records", e))?;

    let weight_series = weight_series(&pet, &health_records);

    Ok(PetDetail {
        pet,
        health_records,
        weight_series,
    })
}

/// Replace a pet's editable fields.
pub async fn update_pet(
    pool: &PgPool,
    user_id: Uuid,
    pet_id: Uuid,
    input: NewPet,
) -> ActionResult<Pet> {
    validated(input, |input| async move {
        sqlx::query_as(
            r#"
            UPDATE pets SET
                name = $3, species = $4, breed = $5, gender = $6,
                is_neutered = $7, birth_date = $8, weight = $9,
                photo_url = $10, allergies = $11, updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING *
            "#,
        )
        .bind(pet_id)
        .bind(user_id)
        .bind(input.name.trim())
        .bind(input.species)
        .bind(&input.breed)
        .bind(input.gender)
        .bind(input.is_neutered)
        .bind(input.birth_date)
        .bind(input.weight)
        .bind(&input.photo_url)
        .bind(&input.allergies)
        .fetch_optional(pool)
        .await
        .map_err(|e| ActionError::db("Failed to update pet", e))?
        .ok_or_else(ActionError::pet_not_found)
    })
    .await
}

/// Record the pet's current weight.
pub async fn update_pet_weight(
    pool: &PgPool,
    user_id: Uuid,
    input: UpdatePetWeight,
) -> ActionResult<Pet> {
    validated(input, |input| async move {
        sqlx::query_as(
            r#"
            UPDATE pets SET weight = $3, updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING *
            "#,
        )
        .bind(input.pet_id)
        .bind(user_id)
        .bind(input.weight)
        .fetch_optional(pool)
        .await
        .map_err(|e| ActionError::db("Failed to update weight", e))?
        .ok_or_else(ActionError::pet_not_found)
    })
    .await
}

/// Delete a pet; its health records cascade.
pub async fn delete_pet(pool: &PgPool, user_id: Uuid, pet_id: Uuid) -> ActionResult<()> {
    let result = sqlx::query("DELETE FROM pets WHERE id = $1 AND user_id = $2")
        .bind(pet_id)
        .bind(user_id)
        .execute(pool)
        .await
        .map_err(|e| ActionError::db("Failed to delete pet", e))?;

    if result.rows_affected() == 0 {
        return Err(ActionError::pet_not_found());
    }
    Ok(())
}
