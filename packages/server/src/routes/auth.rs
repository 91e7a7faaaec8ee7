//! Authentication routes: register, login, logout, current user, and the
//! Google OAuth redirect pair.

use axum::extract::{Query, State};
use axum::response::Redirect;
use axum::Json;
use serde::Serialize;
use std::collections::HashMap;
use tower_sessions::Session;

use api::actions;
use api::auth::{self, GoogleOAuth};
use api::schemas::{Login, Signup};
use api::UserInfo;

use crate::application::AppState;
use crate::error::ApiError;
use crate::routes::Success;

pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(input): Json<Signup>,
) -> Result<Json<UserInfo>, ApiError> {
    let user = actions::register(&state.pool, input).await?;
    auth::sign_in(&session, user.id).await?;
    Ok(Json(user.to_info()))
}

pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(input): Json<Login>,
) -> Result<Json<UserInfo>, ApiError> {
    let user = actions::login(&state.pool, input).await?;
    auth::sign_in(&session, user.id).await?;
    Ok(Json(user.to_info()))
}

pub async fn logout(session: Session) -> Result<Json<Success>, ApiError> {
    auth::sign_out(&session).await?;
    Ok(Json(Success::new()))
}

/// The signed-in user, or `null` for anonymous callers. Never an error for
/// plain visitors.
pub async fn me(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<Option<UserInfo>>, ApiError> {
    let Ok(user_id) = auth::current_user_id(&session).await else {
        return Ok(Json(None));
    };
    let user = actions::current_user(&state.pool, user_id).await?;
    Ok(Json(user.map(|u| u.to_info())))
}

#[derive(Debug, Serialize)]
pub struct LoginUrl {
    pub url: String,
}

/// Start the Google flow: the client navigates to the returned URL.
pub async fn google_login(State(state): State<AppState>) -> Result<Json<LoginUrl>, ApiError> {
    let oauth = GoogleOAuth::new()?;
    let url = oauth.authorize_url(&state.pool).await?;
    Ok(Json(LoginUrl { url }))
}

/// Google redirects here; errors land back on the login page with a marker.
pub async fn google_callback(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    session: Session,
) -> Redirect {
    let Some(code) = params.get("code") else {
        tracing::error!("Google callback missing code");
        return Redirect::to("/login?error=missing_code");
    };
    let Some(oauth_state) = params.get("state") else {
        tracing::error!("Google callback missing state");
        return Redirect::to("/login?error=missing_state");
    };

    let oauth = match GoogleOAuth::new() {
        Ok(oauth) => oauth,
        Err(e) => {
            tracing::error!(error = %e, "Failed to create Google OAuth");
            return Redirect::to("/login?error=config_error");
        }
    };

    match oauth.exchange_code(&state.pool, code, oauth_state).await {
        Ok(user) => {
            if let Err(e) = auth::sign_in(&session, user.id).await {
                tracing::error!(error = %e, "Failed to set session");
                return Redirect::to("/login?error=session_error");
            }
            Redirect::to("/dashboard")
        }
        Err(e) => {
            tracing::error!(error = %e, "Google OAuth exchange error");
            Redirect::to("/login?error=oauth_error")
        }
    }
}
