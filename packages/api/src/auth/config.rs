//! OAuth provider configuration from environment variables.

use oauth2::{AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};

use super::AuthError;

/// OAuth provider endpoints and credentials.
#[derive(Debug, Clone)]
pub struct OAuthConfig {
    pub client_id: ClientId,
    pub client_secret: ClientSecret,
    pub auth_url: AuthUrl,
    pub token_url: TokenUrl,
    pub redirect_url: RedirectUrl,
}

impl OAuthConfig {
    /// Google OAuth config from `GOOGLE_CLIENT_ID` / `GOOGLE_CLIENT_SECRET`.
    ///
    /// `AUTH_REDIRECT_URI` overrides the callback URL for deployments behind
    /// a proxy; the default matches the local server address.
    pub fn google() -> Result<Self, AuthError> {
        dotenvy::dotenv().ok();

        let client_id = std::env::var("GOOGLE_CLIENT_ID")
            .map_err(|_| AuthError::MissingEnv("GOOGLE_CLIENT_ID"))?;
        let client_secret = std::env::var("GOOGLE_CLIENT_SECRET")
            .map_err(|_| AuthError::MissingEnv("GOOGLE_CLIENT_SECRET"))?;
        let redirect_uri = std::env::var("AUTH_REDIRECT_URI")
            .unwrap_or_else(|_| "http://localhost:8080/auth/google/callback".to_string());

        Ok(Self {
            client_id: ClientId::new(client_id),
            client_secret: ClientSecret::new(client_secret),
            auth_url: AuthUrl::new("https://accounts.google.com/o/oauth2/v2/auth".to_string())?,
            token_url: TokenUrl::new("https://oauth2.googleapis.com/token".to_string())?,
            redirect_url: RedirectUrl::new(redirect_uri)?,
        })
    }
}
