use axum::{extract::State, Json};

use crate::entities::location::Location;
use crate::AppState;

pub async fn get_location(State(state): State<AppState>) -> Json<Option<Location>> {
    Json(state.session.last_location().await)
}

/// Record the position reported by the rider's device
pub async fn update_location(
    State(state): State<AppState>,
    Json(location): Json<Location>,
) -> Json<Location> {
    state.session.set_location(location).await;
    Json(location)
}
