//! Signup and login payloads.

use serde::{Deserialize, Serialize};

use super::{is_valid_email, Validate, ValidationErrors};

/// Payload for creating a local (email + password) account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signup {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Validate for Signup {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.name.trim().chars().count() < 2 {
            errors.push("name", "Name must be at least 2 characters.");
        }
        if !is_valid_email(self.email.trim()) {
            errors.push("email", "Please enter a valid email.");
        }
        if self.password.chars().count() < 8 {
            errors.push("password", "Password must be at least 8 characters.");
        }
        errors.into_result()
    }
}

/// Payload for logging into a local account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Login {
    pub email: String,
    pub password: String,
}

impl Validate for Login {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if !is_valid_email(self.email.trim()) {
            errors.push("email", "Please enter a valid email.");
        }
        if self.password.chars().count() < 6 {
            errors.push("password", "Password must be at least 6 characters.");
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_rules() {
        let input = Signup {
            name: "J".to_string(),
            email: "not-an-email".to_string(),
            password: "short".to_string(),
        };
        let errors = input.validate().unwrap_err();
        // First failing field wins when the caller flattens to one message.
        assert_eq!(errors.first_message(), "Name must be at least 2 characters.");
        assert_eq!(errors.errors().len(), 3);

        let ok = Signup {
            name: "Jo Owner".to_string(),
            email: "jo@example.com".to_string(),
            password: "hunter2hunter2".to_string(),
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn login_password_floor_is_six() {
        let input = Login {
            email: "jo@example.com".to_string(),
            password: "12345".to_string(),
        };
        assert!(input.validate().is_err());
        let input = Login {
            email: "jo@example.com".to_string(),
            password: "123456".to_string(),
        };
        assert!(input.validate().is_ok());
    }
}
