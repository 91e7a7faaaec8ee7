//! Session helpers.
//!
//! The session stores a single value: the user id under
//! [`SESSION_USER_ID_KEY`]. Every authenticated action starts with
//! [`current_user_id`]; a missing or unparseable value is an authorization
//! failure, never a crash.

use tower_sessions::Session;
use uuid::Uuid;

use crate::error::{ActionError, ActionResult};

/// Key for storing the user id in the session.
pub const SESSION_USER_ID_KEY: &str = "user_id";

/// The acting user's id, or `Unauthorized`.
///
/// Store failures also deny: an unreachable session backend must not let a
/// request through as someone else.
pub async fn current_user_id(session: &Session) -> ActionResult<Uuid> {
    let raw: Option<String> = session.get(SESSION_USER_ID_KEY).await.map_err(|e| {
        tracing::error!(error = %e, "session load failed");
        ActionError::Unauthorized
    })?;
    let Some(raw) = raw else {
        return Err(ActionError::Unauthorized);
    };
    Uuid::parse_str(&raw).map_err(|_| ActionError::Unauthorized)
}

/// Establish a session for `user_id`.
pub async fn sign_in(session: &Session, user_id: Uuid) -> ActionResult<()> {
    session
        .insert(SESSION_USER_ID_KEY, user_id.to_string())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "session insert failed");
            ActionError::Failed("Failed to establish session".to_string())
        })?;
    session.save().await.map_err(|e| {
        tracing::error!(error = %e, "session save failed");
        ActionError::Failed("Failed to establish session".to_string())
    })
}

/// Destroy the current session.
pub async fn sign_out(session: &Session) -> ActionResult<()> {
    session.flush().await.map_err(|e| {
        tracing::error!(error = %e, "session flush failed");
        ActionError::Failed("Failed to sign out".to_string())
    })
}
