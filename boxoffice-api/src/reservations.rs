use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::post,
    Router,
};
use serde::Deserialize;

use crate::error::{method_not_allowed, parse_event_id, AppError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ReserveSpotsRequest {
    pub spots: Vec<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/event/{id}/reserve",
        post(reserve_spots).fallback(method_not_allowed),
    )
}

/// POST /event/{id}/reserve
///
/// The body is decoded regardless of `Content-Type`.
async fn reserve_spots(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    let event_id = parse_event_id(&raw_id)?;

    let req: ReserveSpotsRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::MalformedRequestBody(e.to_string()))?;

    state.reservations.reserve(event_id, &req.spots).await?;

    Ok(StatusCode::NO_CONTENT)
}
