//! Derived views: health score, last activity, weight series, and the
//! per-pet dashboard summary.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{ActionError, ActionResult};
use crate::models::{HealthRecord, Pet};
use crate::schemas::HealthRecordType;

/// Vaccinations a pet is assumed to need for a full score.
pub const EXPECTED_VACCINATIONS: u32 = 5;

/// One point of a pet's weight history, in kilograms.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightEntry {
    pub date: DateTime<Utc>,
    pub weight: f64,
}

/// The most recent health event for a pet.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LastActivity {
    #[serde(rename = "type")]
    pub record_type: HealthRecordType,
    pub date: DateTime<Utc>,
}

/// Dashboard card data for one pet.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PetSummary {
    #[serde(flatten)]
    pub pet: Pet,
    pub vaccination_count: u32,
    pub health_score: u32,
    pub last_activity: Option<LastActivity>,
}

/// Vaccination completion as a 0–100 score: `round(count / expected * 100)`,
/// capped at 100.
pub fn health_score(vaccination_count: u32, expected: u32) -> u32 {
    if expected == 0 {
        return 100;
    }
    let score = (f64::from(vaccination_count) / f64::from(expected) * 100.0).round() as u32;
    score.min(100)
}

/// Extract a pet's weight history from its health records.
///
/// A record contributes a point when its `metadata.weight` parses to a
/// positive number. When no record does and the pet has a current weight,
/// the series is a single point at the pet's `updated_at`.
pub fn weight_series(pet: &Pet, records: &[HealthRecord]) -> Vec<WeightEntry> {
    let mut series: Vec<WeightEntry> = records
        .iter()
        .filter_map(|record| {
            let weight: f64 = record.metadata.as_ref()?.weight.as_deref()?.trim().parse().ok()?;
            (weight > 0.0).then_some(WeightEntry {
                date: record.date,
                weight,
            })
        })
        .collect();

    if series.is_empty() {
        if let Some(weight) = pet.weight.filter(|w| *w > 0.0) {
            series.push(WeightEntry {
                date: pet.updated_at,
                weight,
            });
        }
    }
    series
}

/// Summaries for every pet of `user_id`, newest pet first.
pub async fn dashboard(pool: &PgPool, user_id: Uuid) -> ActionResult<Vec<PetSummary>> {
    let pets = Pet::for_user(pool, user_id)
        .await
        .map_err(|e| ActionError::db("Failed to load dashboard", e))?;
    if pets.is_empty() {
        return Ok(Vec::new());
    }

    let pet_ids: Vec<Uuid> = pets.iter().map(|p| p.id).collect();

    let vaccination_counts: Vec<(Uuid, i64)> = sqlx::query_as(
        r#"
        SELECT pet_id, COUNT(*)
        FROM health_records
        WHERE pet_id = ANY($1) AND record_type = 'VACCINATION'
        GROUP BY pet_id
        "#,
    )
    .bind(&pet_ids)
    .fetch_all(pool)
    .await
    .map_err(|e| ActionError::db("Failed to load dashboard", e))?;

    let last_records: Vec<(Uuid, HealthRecordType, DateTime<Utc>)> = sqlx::query_as(
        r#"
        SELECT DISTINCT ON (pet_id) pet_id, record_type, date
        FROM health_records
        WHERE pet_id = ANY($1)
        ORDER BY pet_id, date DESC
        "#,
    )
    .bind(&pet_ids)
    .fetch_all(pool)
    .await
    .map_err(|e| ActionError::db("Failed to load dashboard", e))?;

    let counts: HashMap<Uuid, i64> = vaccination_counts.into_iter().collect();
    let last: HashMap<Uuid, LastActivity> = last_records
        .into_iter()
        .map(|(pet_id, record_type, date)| (pet_id, LastActivity { record_type, date }))
        .collect();

    Ok(pets
        .into_iter()
        .map(|pet| {
            let vaccination_count = counts.get(&pet.id).copied().unwrap_or(0) as u32;
            let last_activity = last.get(&pet.id).cloned();
            PetSummary {
                vaccination_count,
                health_score: health_score(vaccination_count, EXPECTED_VACCINATIONS),
                last_activity,
                pet,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::{Gender, HealthRecordMetadata, Species};
    use chrono::TimeZone;
    use sqlx::types::Json;

    fn pet(weight: Option<f64>) -> Pet {
        let at = Utc.with_ymd_and_hms(2026, 1, 15, 9, 0, 0).unwrap();
        Pet {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "Max".to_string(),
            species: Species::Dog,
            breed: Some("Beagle".to_string()),
            gender: Gender::Male,
            is_neutered: true,
            birth_date: None,
            weight,
            photo_url: None,
            allergies: Vec::new(),
            created_at: at,
            updated_at: at,
        }
    }

    fn record(
        pet_id: Uuid,
        record_type: HealthRecordType,
        day: u32,
        weight: Option<&str>,
    ) -> HealthRecord {
        let date = Utc.with_ymd_and_hms(2026, 2, day, 12, 0, 0).unwrap();
        HealthRecord {
            id: Uuid::new_v4(),
            pet_id,
            record_type,
            title: "checkup".to_string(),
            date,
            notes: None,
            metadata: weight.map(|w| {
                Json(HealthRecordMetadata {
                    weight: Some(w.to_string()),
                    ..Default::default()
                })
            }),
            created_at: date,
        }
    }

    #[test]
    fn health_score_scales_and_caps() {
        assert_eq!(health_score(0, EXPECTED_VACCINATIONS), 0);
        assert_eq!(health_score(3, EXPECTED_VACCINATIONS), 60);
        assert_eq!(health_score(5, EXPECTED_VACCINATIONS), 100);
        assert_eq!(health_score(12, EXPECTED_VACCINATIONS), 100);
        assert_eq!(health_score(1, 3), 33);
        assert_eq!(health_score(7, 0), 100);
    }

    #[test]
    fn weight_series_takes_parseable_positive_weights() {
        let pet = pet(Some(11.0));
        let records = vec![
            record(pet.id, HealthRecordType::Visit, 20, Some("12.4")),
            record(pet.id, HealthRecordType::Visit, 14, None),
            record(pet.id, HealthRecordType::Medication, 10, Some("12.1")),
            record(pet.id, HealthRecordType::Visit, 7, Some("not a number")),
            record(pet.id, HealthRecordType::Visit, 2, Some("0")),
        ];
        let series = weight_series(&pet, &records);
        let weights: Vec<f64> = series.iter().map(|e| e.weight).collect();
        assert_eq!(weights, vec![12.4, 12.1]);
    }

    #[test]
    fn weight_series_falls_back_to_current_weight() {
        let pet = pet(Some(11.0));
        let records = vec![record(pet.id, HealthRecordType::Visit, 20, None)];
        let series = weight_series(&pet, &records);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].weight, 11.0);
        assert_eq!(series[0].date, pet.updated_at);
    }

    #[test]
    fn weight_series_empty_without_any_weight() {
        let pet = pet(None);
        assert!(weight_series(&pet, &[]).is_empty());
    }
}
