pub mod classes;
pub mod health;
pub mod members;
pub mod trainers;

use axum::Router;
use tower_http::cors::CorsLayer;

use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(members::routes())
        .merge(classes::routes())
        .merge(trainers::routes())
        .merge(health::routes())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
