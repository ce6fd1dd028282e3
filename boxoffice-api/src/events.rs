use axum::{
    extract::{Path, State},
    routing::{get, MethodRouter},
    Json, Router,
};
use boxoffice_shared::{Event, Spot};

use crate::error::{method_not_allowed, parse_event_id, AppError};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/events", only_get(get(list_events)))
        .route("/events/{id}", only_get(get(get_event)))
        .route("/events/{id}/spots", only_get(get(list_event_spots)))
}

/// `get` also answers HEAD; these routes accept GET and nothing else.
fn only_get(route: MethodRouter<AppState>) -> MethodRouter<AppState> {
    route.head(method_not_allowed).fallback(method_not_allowed)
}

/// GET /events
async fn list_events(State(state): State<AppState>) -> Json<Vec<Event>> {
    Json(state.query.list_events().await)
}

/// GET /events/{id}
async fn get_event(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Event>, AppError> {
    let event_id = parse_event_id(&raw_id)?;
    let event = state.query.get_event(event_id).await?;
    Ok(Json(event))
}

/// GET /events/{id}/spots
///
/// An unknown event yields `200 []`, same as an event without spots.
async fn list_event_spots(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Vec<Spot>>, AppError> {
    let event_id = parse_event_id(&raw_id)?;
    Ok(Json(state.query.list_spots(event_id).await))
}
