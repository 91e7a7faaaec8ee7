//! Pet routes.

use axum::extract::{Path, State};
use axum::Json;
use tower_sessions::Session;
use uuid::Uuid;

use api::actions::{self, PetDetail};
use api::auth::current_user_id;
use api::schemas::{NewPet, UpdatePetWeight};
use api::Pet;

use crate::application::AppState;
use crate::error::ApiError;
use crate::routes::Success;

pub async fn list(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<Vec<Pet>>, ApiError> {
    let user_id = current_user_id(&session).await?;
    Ok(Json(actions::list_pets(&state.pool, user_id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Json(input): Json<NewPet>,
) -> Result<Json<Pet>, ApiError> {
    let user_id = current_user_id(&session).await?;
    Ok(Json(actions::create_pet(&state.pool, user_id, input).await?))
}

pub async fn detail(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
) -> Result<Json<PetDetail>, ApiError> {
    let user_id = current_user_id(&session).await?;
    Ok(Json(actions::get_pet(&state.pool, user_id, id).await?))
}

pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
    Json(input): Json<NewPet>,
) -> Result<Json<Pet>, ApiError> {
    let user_id = current_user_id(&session).await?;
    Ok(Json(
        actions::update_pet(&state.pool, user_id, id, input).await?,
    ))
}

pub async fn record_weight(
    State(state): State<AppState>,
    session: Session,
    Json(input): Json<UpdatePetWeight>,
) -> Result<Json<Pet>, ApiError> {
    let user_id = current_user_id(&session).await?;
    Ok(Json(
        actions::update_pet_weight(&state.pool, user_id, input).await?,
    ))
}

pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
) -> Result<Json<Success>, ApiError> {
    let user_id = current_user_id(&session).await?;
    actions::delete_pet(&state.pool, user_id, id).await?;
    Ok(Json(Success::new()))
}
