//! Application bootstrap: pool, migrations, session layer, router, listener.

use std::time::Duration;

use anyhow::Context as _;
use sqlx::PgPool;
use tower_http::trace::TraceLayer;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::PostgresStore;

use crate::routes;
use crate::settings::Settings;

/// Shared state for all handlers.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

/// Run the server until the listener fails.
pub async fn serve(settings: Settings) -> anyhow::Result<()> {
    let pool = api::db::connect(&settings.database.url())
        .await
        .context("Failed to connect to database")?;

    api::db::MIGRATOR
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    // Sessions live in PostgreSQL next to everything else; the store manages
    // its own table.
    let session_store = PostgresStore::new(pool.clone());
    session_store
        .migrate()
        .await
        .context("Failed to migrate session store")?;

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(settings.session.secure)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(
            Duration::from_secs(60 * 60 * 24 * settings.session.inactivity_days)
                .try_into()
                .context("Session expiry out of range")?,
        ));

    let router = routes::router(AppState { pool })
        .layer(session_layer)
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", settings.http.host, settings.http.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .context("Server stopped")
}
