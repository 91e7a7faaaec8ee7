//! Authentication: Google OAuth, password hashing, session helpers.

mod config;
mod google;
mod password;
mod session;

pub use config::OAuthConfig;
pub use google::GoogleOAuth;
pub use password::{hash_password, verify_password};
pub use session::{current_user_id, sign_in, sign_out, SESSION_USER_ID_KEY};

use thiserror::Error;

/// Failures specific to the OAuth flow. Surfaced to the user as a redirect
/// with an error marker; the detail is logged server-side.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("{0} is not set")]
    MissingEnv(&'static str),

    #[error("invalid OAuth endpoint URL: {0}")]
    InvalidUrl(#[from] oauth2::url::ParseError),

    #[error("invalid or expired OAuth state")]
    InvalidState,

    #[error("token exchange failed: {0}")]
    TokenExchange(String),

    #[error("userinfo request failed: {0}")]
    UserInfo(#[from] reqwest::Error),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}
