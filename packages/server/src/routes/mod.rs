//! Route table. Every mutation entry point the frontends call maps to one
//! action in the `api` crate.

mod auth;
mod dashboard;
mod health_records;
mod pets;

use axum::routing::{delete, get, post};
use axum::Router;
use serde::Serialize;

use crate::application::AppState;

/// Body for mutations with nothing else to say.
#[derive(Debug, Serialize)]
pub struct Success {
    pub success: bool,
}

impl Success {
    pub fn new() -> Self {
        Success { success: true }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/login/google", get(auth::google_login))
        .route("/auth/google/callback", get(auth::google_callback))
        .route("/api/dashboard", get(dashboard::summary))
        .route("/api/pets", get(pets::list).post(pets::create))
        .route(
            "/api/pets/{id}",
            get(pets::detail).put(pets::update).delete(pets::remove),
        )
        .route("/api/pets/weight", post(pets::record_weight))
        .route("/api/pets/{id}/records", get(health_records::list))
        .route("/api/health-records", post(health_records::create))
        .route("/api/health-records/{id}", delete(health_records::remove))
        .with_state(state)
}
