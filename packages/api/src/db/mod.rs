//! # Database module — PostgreSQL pool and migrations
//!
//! The pool is built once at startup from the server settings and handed to
//! every action as `&PgPool`. Migrations live under `packages/api/migrations`
//! and are embedded via [`MIGRATOR`]; the server runs them before accepting
//! connections. The session table is managed separately by the
//! tower-sessions store's own `migrate()`.

mod pool;

pub use pool::connect;

/// Embedded migrations from `packages/api/migrations`.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();
