use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use gymkeep_core::{GymClass, GymClassPatch, GymClassPayload};

use crate::error::Result;
use crate::extract::JsonBody;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/classes", get(list_classes).post(add_class))
        .route("/classes/by-start-time", get(filter_by_start_time))
        .route(
            "/classes/{id}",
            get(get_class).put(update_class).delete(delete_class),
        )
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartTimeQuery {
    #[serde(default)]
    start_time: String,
}

async fn list_classes(State(state): State<AppState>) -> Result<Json<Vec<GymClass>>> {
    Ok(Json(state.service.list_gym_classes()?))
}

async fn get_class(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GymClass>> {
    Ok(Json(state.service.get_gym_class(&id)?))
}

async fn add_class(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<GymClassPayload>,
) -> Result<(StatusCode, Json<GymClass>)> {
    let class = state.service.add_gym_class(payload)?;
    Ok((StatusCode::CREATED, Json(class)))
}

async fn update_class(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<GymClassPatch>,
) -> Result<Json<GymClass>> {
    Ok(Json(state.service.update_gym_class(&id, patch)?))
}

async fn delete_class(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GymClass>> {
    Ok(Json(state.service.delete_gym_class(&id)?))
}

async fn filter_by_start_time(
    State(state): State<AppState>,
    Query(query): Query<StartTimeQuery>,
) -> Result<Json<Vec<GymClass>>> {
    let classes = state
        .service
        .filter_gym_classes_by_start_time(&query.start_time)?;
    Ok(Json(classes))
}
