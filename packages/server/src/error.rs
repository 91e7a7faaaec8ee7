//! HTTP mapping for action errors: `{"error": "..."}` bodies, one status per
//! taxonomy case.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use api::auth::AuthError;
use api::ActionError;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Wrapper so `?` works in handlers returning `Result<_, ApiError>`.
#[derive(Debug)]
pub struct ApiError(ActionError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ActionError::Validation(_) => StatusCode::BAD_REQUEST,
            ActionError::Unauthorized | ActionError::InvalidCredentials => {
                StatusCode::UNAUTHORIZED
            }
            ActionError::NotFound(_) => StatusCode::NOT_FOUND,
            ActionError::Failed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ActionError> for ApiError {
    fn from(err: ActionError) -> Self {
        ApiError(err)
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        tracing::error!(error = %err, "OAuth error");
        ApiError(ActionError::Failed(
            "Failed to start Google sign-in".to_string(),
        ))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorBody {
            error: self.0.to_string(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_per_case() {
        let cases = [
            (
                ApiError::from(ActionError::Validation("Title is required".into())),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::from(ActionError::Unauthorized),
                StatusCode::UNAUTHORIZED,
            ),
            (
                ApiError::from(ActionError::InvalidCredentials),
                StatusCode::UNAUTHORIZED,
            ),
            (
                ApiError::from(ActionError::pet_not_found()),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::from(ActionError::Failed("Failed to create pet".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(err.status(), status);
        }
    }
}
