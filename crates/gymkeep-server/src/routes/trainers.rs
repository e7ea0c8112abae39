use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use gymkeep_core::{Trainer, TrainerPatch, TrainerPayload};

use crate::error::Result;
use crate::extract::JsonBody;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/trainers", get(list_trainers).post(add_trainer))
        .route(
            "/trainers/{id}",
            get(get_trainer).put(update_trainer).delete(delete_trainer),
        )
        .route("/trainers/{id}/availability", get(check_availability))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    #[serde(default)]
    start_time: String,
    #[serde(default)]
    end_time: String,
}

#[derive(Serialize)]
struct AvailabilityResponse {
    available: bool,
}

async fn list_trainers(State(state): State<AppState>) -> Result<Json<Vec<Trainer>>> {
    Ok(Json(state.service.list_trainers()?))
}

async fn get_trainer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Trainer>> {
    Ok(Json(state.service.get_trainer(&id)?))
}

async fn add_trainer(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<TrainerPayload>,
) -> Result<(StatusCode, Json<Trainer>)> {
    let trainer = state.service.add_trainer(payload)?;
    Ok((StatusCode::CREATED, Json(trainer)))
}

async fn update_trainer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<TrainerPatch>,
) -> Result<Json<Trainer>> {
    Ok(Json(state.service.update_trainer(&id, patch)?))
}

async fn delete_trainer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Trainer>> {
    Ok(Json(state.service.delete_trainer(&id)?))
}

async fn check_availability(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>> {
    let available =
        state
            .service
            .check_trainer_availability(&id, &query.start_time, &query.end_time)?;
    Ok(Json(AvailabilityResponse { available }))
}
