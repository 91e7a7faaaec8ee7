//! Account registration and credential login.

use sqlx::PgPool;
use uuid::Uuid;

use super::validated;
use crate::auth::{hash_password, verify_password};
use crate::error::{ActionError, ActionResult};
use crate::models::User;
use crate::schemas::{Login, Signup, Validate};

/// Create a local account and return the new user.
///
/// Email is normalized (trim + lowercase) and doubles as the provider id for
/// `provider = 'local'` rows, so the duplicate check and the login lookup
/// agree on the key.
pub async fn register(pool: &PgPool, input: Signup) -> ActionResult<User> {
    validated(input, |input| async move {
        let email = input.email.trim().to_lowercase();
        let name = input.name.trim().to_string();

        let existing = User::find_local(pool, &email)
            .await
            .map_err(|e| ActionError::db("Failed to create account", e))?;
        if existing.is_some() {
            return Err(ActionError::Validation(
                "An account with this email already exists".to_string(),
            ));
        }

        let password_hash = hash_password(&input.password).map_err(|e| {
            tracing::error!(error = %e, "password hashing failed");
            ActionError::Failed("Failed to create account".to_string())
        })?;

        sqlx::query_as(
            r#"
            INSERT INTO users (email, name, provider, provider_id, password_hash)
            VALUES ($1, $2, 'local', $1, $3)
            RETURNING *
            "#,
        )
        .bind(&email)
        .bind(&name)
        .bind(&password_hash)
        .fetch_one(pool)
        .await
        .map_err(|e| ActionError::db("Failed to create account", e))
    })
    .await
}

/// Verify credentials and return the user.
///
/// Malformed input, unknown email, social-only account, and wrong password
/// all collapse into the same `InvalidCredentials` answer.
pub async fn login(pool: &PgPool, input: Login) -> ActionResult<User> {
    if input.validate().is_err() {
        return Err(ActionError::InvalidCredentials);
    }

    let email = input.email.trim().to_lowercase();
    let user = User::find_local(pool, &email)
        .await
        .map_err(|e| ActionError::db("Failed to sign in", e))?
        .ok_or(ActionError::InvalidCredentials)?;

    let Some(ref hash) = user.password_hash else {
        return Err(ActionError::InvalidCredentials);
    };

    let valid = verify_password(&input.password, hash).map_err(|e| {
        tracing::error!(error = %e, "stored password hash is malformed");
        ActionError::InvalidCredentials
    })?;
    if !valid {
        return Err(ActionError::InvalidCredentials);
    }

    Ok(user)
}

/// Load the acting user, if the session still points at a live row.
pub async fn current_user(pool: &PgPool, user_id: Uuid) -> ActionResult<Option<User>> {
    User::find(pool, user_id)
        .await
        .map_err(|e| ActionError::db("Failed to load user", e))
}
