//! Error taxonomy shared by every action.
//!
//! Actions fail in one of a small, fixed set of ways, and the message in each
//! case is safe to show to the client:
//!
//! - [`ActionError::Validation`] — the first failing field's message, produced
//!   by [`crate::actions::validated`].
//! - [`ActionError::Unauthorized`] — no session, or a session that does not
//!   resolve to a user.
//! - [`ActionError::InvalidCredentials`] — login failures, deliberately
//!   indistinguishable between unknown email and wrong password.
//! - [`ActionError::NotFound`] — an ownership-scoped lookup came back empty.
//! - [`ActionError::Failed`] — a persistence failure. The underlying error is
//!   logged; the client sees only the per-action message.

use thiserror::Error;

/// Result alias used by all action functions.
pub type ActionResult<T> = Result<T, ActionError>;

/// Everything that can go wrong inside an action.
#[derive(Debug, Error)]
pub enum ActionError {
    /// Input failed schema validation; carries the first field's message.
    #[error("{0}")]
    Validation(String),

    /// Missing or unusable session.
    #[error("Unauthorized")]
    Unauthorized,

    /// Login with an unknown account or a wrong password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Ownership-scoped lookup found nothing the caller may touch.
    #[error("{0}")]
    NotFound(String),

    /// Persistence failure with a generic, client-safe message.
    #[error("{0}")]
    Failed(String),
}

impl ActionError {
    /// Wrap a database error: log the real cause, keep the client message generic.
    pub fn db(message: &str, err: sqlx::Error) -> Self {
        tracing::error!(error = %err, "database error");
        ActionError::Failed(message.to_string())
    }

    /// The fixed message for a pet the caller does not own (or that does not exist).
    pub fn pet_not_found() -> Self {
        ActionError::NotFound("Pet not found or unauthorized".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_client_safe() {
        assert_eq!(ActionError::Unauthorized.to_string(), "Unauthorized");
        assert_eq!(
            ActionError::InvalidCredentials.to_string(),
            "Invalid email or password"
        );
        assert_eq!(
            ActionError::pet_not_found().to_string(),
            "Pet not found or unauthorized"
        );
        assert_eq!(
            ActionError::Validation("Title is required".into()).to_string(),
            "Title is required"
        );
    }
}
