use crate::application::TicketingError;
use crate::presentation::rest::dto::ErrorResponse;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// API error type
#[derive(Error, Debug)]
#[error("API Error {status}: {message}")]
pub struct ApiError {
    pub message: String,
    pub status: StatusCode,
}

impl ApiError {
    /// A rejected business rule; the message is shown to the client
    pub fn unprocessable(message: impl Into<String>) -> Self {
        ApiError {
            message: message.into(),
            status: StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError {
            message: message.into(),
            status: StatusCode::NOT_FOUND,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError {
            message: message.into(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<TicketingError> for ApiError {
    fn from(err: TicketingError) -> Self {
        if err.is_validation() {
            return ApiError::unprocessable(err.to_string());
        }

        // Store faults stay in the logs
        tracing::error!(error = %err, "request failed on a store fault");
        ApiError::internal("Internal server error")
    }
}

/// Unreadable request bodies keep axum's status but use the `{"message"}` shape
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError {
            message: rejection.body_text(),
            status: rejection.status(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse::new(self.message));
        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::StoreError;
    use crate::domain::EntityKind;

    #[test]
    fn test_domain_errors_are_unprocessable() {
        let err = ApiError::from(TicketingError::CapacityExceeded(EntityKind::Event));
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.message, "Event sold out");
    }

    #[test]
    fn test_store_faults_hide_details() {
        let err = ApiError::from(TicketingError::Store(StoreError::Unavailable(
            "db at 10.0.0.3 refused connection".to_string(),
        )));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Internal server error");
    }

    #[test]
    fn test_display_names_status_and_message() {
        let err = ApiError::unprocessable("Event sold out");
        assert_eq!(err.to_string(), "API Error 422 Unprocessable Entity: Event sold out");
    }
}
