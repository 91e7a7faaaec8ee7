//! # Google OAuth 2.0 — the application's social sign-in provider
//!
//! Authorization Code flow with PKCE.
//!
//! 1. [`GoogleOAuth::authorize_url`] builds an authorization URL requesting
//!    the `openid`, `email`, and `profile` scopes, generates a random PKCE
//!    challenge, and persists the CSRF state + verifier in the `oauth_states`
//!    table with a 10-minute expiry.
//!
//! 2. [`GoogleOAuth::exchange_code`] runs in the `/auth/google/callback`
//!    route. It consumes the matching `oauth_states` row (a single
//!    `DELETE .. RETURNING` that also checks expiry), exchanges the code and
//!    verifier for an access token, fetches the user's profile from the
//!    userinfo endpoint, and upserts the user keyed on
//!    `(provider = 'google', provider_id)` so returning users get their
//!    profile refreshed.

use oauth2::basic::BasicClient;
use oauth2::{
    AuthorizationCode, CsrfToken, EndpointNotSet, EndpointSet, PkceCodeChallenge,
    PkceCodeVerifier, Scope, TokenResponse,
};
use sqlx::PgPool;

use serde::Deserialize;

use super::config::OAuthConfig;
use super::AuthError;
use crate::models::User;

/// Google user info from the userinfo API.
#[derive(Debug, Deserialize)]
struct GoogleUser {
    id: String,
    email: String,
    name: Option<String>,
    picture: Option<String>,
}

/// OAuth client type with auth URL and token URL set.
type ConfiguredClient = oauth2::Client<
    oauth2::basic::BasicErrorResponse,
    oauth2::basic::BasicTokenResponse,
    oauth2::basic::BasicTokenIntrospectionResponse,
    oauth2::StandardRevocableToken,
    oauth2::basic::BasicRevocationErrorResponse,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Google OAuth handler.
pub struct GoogleOAuth {
    config: OAuthConfig,
}

impl GoogleOAuth {
    /// Create a handler from environment configuration.
    pub fn new() -> Result<Self, AuthError> {
        Ok(Self {
            config: OAuthConfig::google()?,
        })
    }

    fn create_client(&self) -> ConfiguredClient {
        BasicClient::new(self.config.client_id.clone())
            .set_client_secret(self.config.client_secret.clone())
            .set_auth_uri(self.config.auth_url.clone())
            .set_token_uri(self.config.token_url.clone())
            .set_redirect_uri(self.config.redirect_url.clone())
    }

    /// Generate the authorization URL and persist the state + PKCE verifier.
    pub async fn authorize_url(&self, pool: &PgPool) -> Result<String, AuthError> {
        let client = self.create_client();
        let (pkce_challenge, pkce_verifier) = PkceCodeChallenge::new_random_sha256();

        let (auth_url, csrf_state) = client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("openid".to_string()))
            .add_scope(Scope::new("email".to_string()))
            .add_scope(Scope::new("profile".to_string()))
            .set_pkce_challenge(pkce_challenge)
            .url();

        sqlx::query(
            r#"
            INSERT INTO oauth_states (state, provider, pkce_verifier, expires_at)
            VALUES ($1, 'google', $2, NOW() + INTERVAL '10 minutes')
            "#,
        )
        .bind(csrf_state.secret())
        .bind(pkce_verifier.secret())
        .execute(pool)
        .await?;

        Ok(auth_url.to_string())
    }

    /// Exchange the authorization code for tokens and upsert the user.
    pub async fn exchange_code(
        &self,
        pool: &PgPool,
        code: &str,
        state: &str,
    ) -> Result<User, AuthError> {
        // Consume the state row; expiry is checked in the same statement.
        let row: Option<(String,)> = sqlx::query_as(
            r#"
            DELETE FROM oauth_states
            WHERE state = $1 AND provider = 'google' AND expires_at > NOW()
            RETURNING pkce_verifier
            "#,
        )
        .bind(state)
        .fetch_optional(pool)
        .await?;

        let pkce_verifier = row.ok_or(AuthError::InvalidState)?.0;

        let http_client = reqwest::ClientBuilder::new()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        let client = self.create_client();

        let token_result = client
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .set_pkce_verifier(PkceCodeVerifier::new(pkce_verifier))
            .request_async(&http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        let access_token = token_result.access_token().secret();

        let google_user: GoogleUser = reqwest::Client::new()
            .get("https://www.googleapis.com/oauth2/v2/userinfo")
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?
            .json()
            .await?;

        let user: User = sqlx::query_as(
            r#"
            INSERT INTO users (email, name, avatar_url, provider, provider_id)
            VALUES ($1, $2, $3, 'google', $4)
            ON CONFLICT (provider, provider_id)
            DO UPDATE SET
                email = EXCLUDED.email,
                name = EXCLUDED.name,
                avatar_url = EXCLUDED.avatar_url,
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(&google_user.email)
        .bind(&google_user.name)
        .bind(&google_user.picture)
        .bind(&google_user.id)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }
}
