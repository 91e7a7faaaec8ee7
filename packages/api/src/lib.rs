//! # API crate — domain logic for the PawTrack service
//!
//! This crate is the backbone of the PawTrack backend. It defines the database
//! models, the validated action functions the HTTP layer calls, and the
//! supporting modules they depend on. The `server` crate wires these into an
//! axum router; nothing in here knows about routes or extractors beyond the
//! session type.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`actions`] | Server-side operations: auth, pet CRUD, health records, dashboard summaries. Every mutation validates its input and is scoped to the acting user. |
//! | [`auth`] | Google OAuth (PKCE), Argon2 password hashing, session helpers |
//! | [`db`] | PostgreSQL connection pool and embedded migrations |
//! | [`error`] | The `ActionError` taxonomy every action returns |
//! | [`models`] | Database rows (`User`, `Pet`, `HealthRecord`) and their client-safe projections |
//! | [`schemas`] | Input types and the `Validate` trait behind [`actions::validated`] |

pub mod actions;
pub mod auth;
pub mod db;
pub mod error;
pub mod models;
pub mod schemas;

pub use error::{ActionError, ActionResult};
pub use models::{HealthRecord, Pet, User, UserInfo};
