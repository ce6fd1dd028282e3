use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use boxoffice_core::{QueryError, ReservationError};
use boxoffice_shared::EventId;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid event id: {0}")]
    InvalidIdentifier(String),

    #[error("Invalid request body: {0}")]
    MalformedRequestBody(String),

    #[error(transparent)]
    Reservation(#[from] ReservationError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("Method {0} not allowed")]
    UnsupportedMethod(Method),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidIdentifier(_) | AppError::MalformedRequestBody(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Reservation(err) => match err {
                ReservationError::SpotNotFound { .. } => StatusCode::NOT_FOUND,
                ReservationError::EmptyRequest
                | ReservationError::DuplicateInRequest(_)
                | ReservationError::SpotUnavailable(_) => StatusCode::BAD_REQUEST,
            },
            AppError::Query(QueryError::EventNotFound(_)) => StatusCode::NOT_FOUND,
            AppError::UnsupportedMethod(_) => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(status = status.as_u16(), "Request failed: {}", self);

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

/// Parses an id taken from the request path.
pub fn parse_event_id(raw: &str) -> Result<EventId, AppError> {
    raw.parse()
        .map_err(|_| AppError::InvalidIdentifier(raw.to_string()))
}

/// Method fallback for every known route.
pub async fn method_not_allowed(method: Method) -> AppError {
    AppError::UnsupportedMethod(method)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_event_id() {
        assert_eq!(parse_event_id("12").unwrap(), 12);
        assert_eq!(parse_event_id("+5").unwrap(), 5);
        assert!(matches!(parse_event_id("abc"), Err(AppError::InvalidIdentifier(_))));
        assert!(matches!(parse_event_id("1.0"), Err(AppError::InvalidIdentifier(_))));
        assert!(matches!(parse_event_id(""), Err(AppError::InvalidIdentifier(_))));
    }

    #[test]
    fn test_status_mapping() {
        let not_found = AppError::from(ReservationError::SpotNotFound {
            event_id: 1,
            name: "Z9".into(),
        });
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let taken = AppError::from(ReservationError::SpotUnavailable("A2".into()));
        assert_eq!(taken.status(), StatusCode::BAD_REQUEST);

        let missing = AppError::from(QueryError::EventNotFound(4));
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        assert_eq!(
            AppError::UnsupportedMethod(Method::DELETE).status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
    }
}
