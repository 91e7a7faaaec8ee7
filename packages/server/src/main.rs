//! PawTrack server binary.
//!
//! Boots logging, loads settings, connects to PostgreSQL, runs migrations,
//! and serves the JSON API.

mod application;
mod error;
mod routes;
mod settings;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = settings::Settings::new().unwrap_or_default();
    application::serve(settings).await
}
