//! # User model for authenticated owners
//!
//! Two representations of a PawTrack user:
//!
//! ## [`User`]
//!
//! The complete row from the `users` table, loadable via [`sqlx::FromRow`]:
//!
//! - `id` — primary key (`UUID v4`).
//! - `email`, `name`, `avatar_url` — profile fields from signup or OAuth.
//! - `provider` / `provider_id` — identify the auth provider (`"google"`, or
//!   `"local"` for email+password accounts where `provider_id` equals the email).
//! - `password_hash` — Argon2 hash, present only for `"local"` accounts.
//! - `created_at` / `updated_at` — audit timestamps.
//!
//! ## [`UserInfo`]
//!
//! The subset returned to clients. It omits the password hash and timestamps;
//! [`UserInfo::display_name`] falls back to the email address.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// Full user record from the database.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub provider: String,
    pub provider_id: String,
    pub password_hash: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Load a user by primary key.
    pub async fn find(pool: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Load a local (email + password) account by normalized email.
    pub async fn find_local(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM users WHERE provider = 'local' AND provider_id = $1")
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Convert to the client-safe projection.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
            avatar_url: self.avatar_url.clone(),
            provider: self.provider.clone(),
        }
    }
}

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub provider: String,
}

impl UserInfo {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_falls_back_to_email() {
        let info = UserInfo {
            id: Uuid::nil(),
            email: "jo@example.com".to_string(),
            name: None,
            avatar_url: None,
            provider: "local".to_string(),
        };
        assert_eq!(info.display_name(), "jo@example.com");

        let named = UserInfo {
            name: Some("Jo Owner".to_string()),
            ..info
        };
        assert_eq!(named.display_name(), "Jo Owner");
    }
}
