//! Connection pool construction.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Open a connection pool against `database_url`.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
}
