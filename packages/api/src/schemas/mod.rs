//! Input schemas and validation.
//!
//! Each action input is a plain struct implementing [`Validate`]. Validation
//! collects every failing field, but callers surface only the first message —
//! the behavior the frontends were built against.

mod auth;
mod health_record;
mod pet;

pub use auth::{Login, Signup};
pub use health_record::{
    DeleteHealthRecord, HealthRecordMetadata, HealthRecordType, NewHealthRecord,
};
pub use pet::{Gender, NewPet, Species, UpdatePetWeight};

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Ordered collection of field errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: &'static str) {
        self.0.push(FieldError { field, message });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// The first failing field's message, or a generic fallback.
    pub fn first_message(&self) -> &str {
        self.0.first().map(|e| e.message).unwrap_or("Invalid input")
    }

    /// `Ok(())` when empty, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Implemented by every action input.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// Loose email shape check: one `@`, something on both sides, no whitespace.
pub(crate) fn is_valid_email(value: &str) -> bool {
    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && !domain.is_empty()
                && domain.contains('.')
                && !value.chars().any(char::is_whitespace)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_message_falls_back() {
        assert_eq!(ValidationErrors::new().first_message(), "Invalid input");
    }

    #[test]
    fn first_message_is_insertion_ordered() {
        let mut errors = ValidationErrors::new();
        errors.push("name", "Name must be at least 2 characters.");
        errors.push("email", "Please enter a valid email.");
        assert_eq!(
            errors.first_message(),
            "Name must be at least 2 characters."
        );
        assert_eq!(errors.errors().len(), 2);
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("name@example.com"));
        assert!(!is_valid_email("name@example"));
        assert!(!is_valid_email("nameexample.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("na me@example.com"));
        assert!(!is_valid_email("a@b@example.com"));
    }
}
