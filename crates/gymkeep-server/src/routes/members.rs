use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;

use gymkeep_core::{Member, MemberField, MemberPatch, MemberPayload};

use crate::error::Result;
use crate::extract::JsonBody;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/members", get(list_members).post(add_member))
        .route("/members/search", get(search_members))
        .route(
            "/members/{id}",
            get(get_member).put(update_member).delete(delete_member),
        )
        .route("/members/{id}/membership-type", put(update_membership_type))
        .route("/members/{id}/email", put(update_email))
        .route("/members/{id}/name", put(update_name))
}

/// Body of a single-field update.
#[derive(Deserialize)]
pub struct FieldValue {
    #[serde(default)]
    value: String,
}

#[derive(Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    q: String,
}

async fn list_members(State(state): State<AppState>) -> Result<Json<Vec<Member>>> {
    Ok(Json(state.service.list_members()?))
}

async fn get_member(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Member>> {
    Ok(Json(state.service.get_member(&id)?))
}

async fn add_member(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<MemberPayload>,
) -> Result<(StatusCode, Json<Member>)> {
    let member = state.service.add_member(payload)?;
    Ok((StatusCode::CREATED, Json(member)))
}

async fn update_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<MemberPatch>,
) -> Result<Json<Member>> {
    Ok(Json(state.service.update_member(&id, patch)?))
}

async fn delete_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Member>> {
    Ok(Json(state.service.delete_member(&id)?))
}

async fn update_field(
    state: AppState,
    id: String,
    field: MemberField,
    body: FieldValue,
) -> Result<Json<Member>> {
    let member = state.service.update_member_field(&id, field, body.value)?;
    Ok(Json(member))
}

async fn update_membership_type(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<FieldValue>,
) -> Result<Json<Member>> {
    update_field(state, id, MemberField::MembershipType, body).await
}

async fn update_email(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<FieldValue>,
) -> Result<Json<Member>> {
    update_field(state, id, MemberField::Email, body).await
}

async fn update_name(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<FieldValue>,
) -> Result<Json<Member>> {
    update_field(state, id, MemberField::Name, body).await
}

async fn search_members(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Member>>> {
    Ok(Json(state.service.search_members(&query.q)?))
}
