//! Pet input schema: species/gender enumerations and the creation payload.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Validate, ValidationErrors};

/// Supported species. Stored in PostgreSQL as the `species` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "species", rename_all = "UPPERCASE")]
pub enum Species {
    Dog,
    Cat,
    Rabbit,
    Bird,
    Reptile,
    Other,
}

/// Pet gender. Stored in PostgreSQL as the `gender` enum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "gender", rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unknown,
}

/// Payload for registering a pet, and the full replacement state for updates.
///
/// The fields follow the two-step registration form: identity first (name,
/// species, breed, photo), medical specifics second (gender, birth date,
/// weight, neutered flag, allergies), submitted together.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPet {
    pub name: String,
    pub species: Species,
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub is_neutered: bool,
    #[serde(default)]
    pub allergies: Vec<String>,
}

impl Validate for NewPet {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.name.trim().chars().count() < 2 {
            errors.push("name", "Name must be at least 2 characters.");
        }
        if let Some(weight) = self.weight {
            if !weight.is_finite() || weight < 0.0 {
                errors.push("weight", "Weight must be zero or greater.");
            }
        }
        if self.allergies.iter().any(|a| a.trim().is_empty()) {
            errors.push("allergies", "Allergies cannot be blank.");
        }
        errors.into_result()
    }
}

/// Payload for recording a pet's current weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePetWeight {
    pub pet_id: Uuid,
    pub weight: f64,
}

impl Validate for UpdatePetWeight {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if !self.weight.is_finite() || self.weight < 0.1 {
            errors.push("weight", "Weight must be greater than 0");
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pet(name: &str) -> NewPet {
        NewPet {
            name: name.to_string(),
            species: Species::Dog,
            breed: None,
            photo_url: None,
            gender: Gender::default(),
            birth_date: None,
            weight: None,
            is_neutered: false,
            allergies: Vec::new(),
        }
    }

    #[test]
    fn accepts_minimal_pet() {
        assert!(pet("Max").validate().is_ok());
    }

    #[test]
    fn rejects_short_name() {
        let errors = pet(" M ").validate().unwrap_err();
        assert_eq!(errors.first_message(), "Name must be at least 2 characters.");
    }

    #[test]
    fn rejects_negative_weight() {
        let mut input = pet("Max");
        input.weight = Some(-4.2);
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.first_message(), "Weight must be zero or greater.");
    }

    #[test]
    fn rejects_blank_allergy() {
        let mut input = pet("Max");
        input.allergies = vec!["pollen".to_string(), "  ".to_string()];
        assert!(input.validate().is_err());
    }

    #[test]
    fn weight_entry_must_be_positive() {
        let input = UpdatePetWeight {
            pet_id: Uuid::nil(),
            weight: 0.0,
        };
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.first_message(), "Weight must be greater than 0");
        assert!(UpdatePetWeight {
            pet_id: Uuid::nil(),
            weight: 7.5,
        }
        .validate()
        .is_ok());
    }

    #[test]
    fn gender_defaults_to_unknown() {
        let input: NewPet =
            serde_json::from_str(r#"{"name":"Bella","species":"CAT"}"#).unwrap();
        assert_eq!(input.gender, Gender::Unknown);
        assert!(!input.is_neutered);
        assert!(input.allergies.is_empty());
    }
}
