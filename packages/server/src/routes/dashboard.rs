//! Dashboard route.

use axum::extract::State;
use axum::Json;
use tower_sessions::Session;

use api::actions::{self, PetSummary};
use api::auth::current_user_id;

use crate::application::AppState;
use crate::error::ApiError;

pub async fn summary(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<Vec<PetSummary>>, ApiError> {
    let user_id = current_user_id(&session).await?;
    Ok(Json(actions::dashboard(&state.pool, user_id).await?))
}
