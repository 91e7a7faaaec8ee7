//! Health record input schema.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Validate, ValidationErrors};

/// Kind of health event. Stored in PostgreSQL as the `health_record_type` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "health_record_type", rename_all = "UPPERCASE")]
pub enum HealthRecordType {
    Vaccination,
    Medication,
    Visit,
    Other,
}

/// Free-form, type-dependent extras stored as JSONB.
///
/// Keys are camelCase on the wire and in the column. `weight` is a decimal
/// string (e.g. `"12.4"`), parsed when deriving the weight series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthRecordMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_due_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dosage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
}

/// Payload for logging a health event against a pet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHealthRecord {
    pub pet_id: Uuid,
    #[serde(rename = "type")]
    pub record_type: HealthRecordType,
    pub title: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub metadata: Option<HealthRecordMetadata>,
}

impl Validate for NewHealthRecord {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.title.trim().is_empty() {
            errors.push("title", "Title is required");
        }
        errors.into_result()
    }
}

/// Payload for deleting a health record. The pet id scopes the delete to a
/// pet the caller owns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteHealthRecord {
    pub id: Uuid,
    pub pet_id: Uuid,
}

impl Validate for DeleteHealthRecord {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_title() {
        let input = NewHealthRecord {
            pet_id: Uuid::nil(),
            record_type: HealthRecordType::Visit,
            title: "   ".to_string(),
            date: Utc::now(),
            notes: None,
            metadata: None,
        };
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.first_message(), "Title is required");
    }

    #[test]
    fn metadata_round_trips_camel_case() {
        let metadata = HealthRecordMetadata {
            dosage: Some("5mg".to_string()),
            weight: Some("12.4".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&metadata).unwrap();
        assert_eq!(json["dosage"], "5mg");
        assert_eq!(json["weight"], "12.4");
        // Unset keys are omitted entirely rather than stored as nulls.
        assert!(json.get("nextDueDate").is_none());

        let back: HealthRecordMetadata = serde_json::from_value(json).unwrap();
        assert_eq!(back, metadata);
    }

    #[test]
    fn record_type_uses_wire_names() {
        let input: NewHealthRecord = serde_json::from_str(
            r#"{"petId":"00000000-0000-0000-0000-000000000000",
                "type":"VACCINATION",
                "title":"Rabies booster",
                "date":"2026-03-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(input.record_type, HealthRecordType::Vaccination);
        assert!(input.validate().is_ok());
    }
}
