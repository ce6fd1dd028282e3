use axum::Router;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod events;
pub mod reservations;
pub mod state;

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(events::routes())
        .merge(reservations::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
