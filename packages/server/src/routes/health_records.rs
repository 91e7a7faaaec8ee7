//! Health record routes.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use tower_sessions::Session;
use uuid::Uuid;

use api::actions;
use api::auth::current_user_id;
use api::schemas::{DeleteHealthRecord, NewHealthRecord};
use api::HealthRecord;

use crate::application::AppState;
use crate::error::ApiError;
use crate::routes::Success;

pub async fn list(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<HealthRecord>>, ApiError> {
    let user_id = current_user_id(&session).await?;
    Ok(Json(
        actions::list_health_records(&state.pool, user_id, id).await?,
    ))
}

pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Json(input): Json<NewHealthRecord>,
) -> Result<Json<HealthRecord>, ApiError> {
    let user_id = current_user_id(&session).await?;
    Ok(Json(
        actions::create_health_record(&state.pool, user_id, input).await?,
    ))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteParams {
    pub pet_id: Uuid,
}

pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
    Query(params): Query<DeleteParams>,
) -> Result<Json<Success>, ApiError> {
    let user_id = current_user_id(&session).await?;
    let input = DeleteHealthRecord {
        id,
        pet_id: params.pet_id,
    };
    actions::delete_health_record(&state.pool, user_id, input).await?;
    Ok(Json(Success::new()))
}
