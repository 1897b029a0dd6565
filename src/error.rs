use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::dictionary::StoreError;
use crate::validation::ValidationError;

/// Custom error type for API endpoints
///
/// Maps each failure to its HTTP status code. Bodies are plain-text,
/// human-readable messages.
#[derive(Debug)]
pub enum ApiError {
    /// A request field broke a validation rule
    InvalidField(ValidationError),
    /// Request body was rejected by the JSON extractor
    InvalidBody(StatusCode, String),
    /// Word is not in the dictionary
    WordNotFound(String),
    /// Word is already in the dictionary
    WordExists(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidField(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(status, _) => *status,
            ApiError::WordNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::WordExists(_) => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::InvalidField(err) => {
                tracing::debug!("Rejected field '{}': {}", err.field, err.message);
                err.message
            }
            ApiError::InvalidBody(_, msg) => msg,
            ApiError::WordNotFound(name) => StoreError::NotFound(name).to_string(),
            ApiError::WordExists(name) => StoreError::Conflict(name).to_string(),
        };

        (status, message).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::InvalidField(err)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(name) => ApiError::WordNotFound(name),
            StoreError::Conflict(name) => ApiError::WordExists(name),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.status(), rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_text(response: Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(body.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_store_errors_map_to_status() {
        let response = ApiError::from(StoreError::NotFound("owl".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, "word 'owl' not found");

        let response = ApiError::from(StoreError::Conflict("owl".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(body_text(response).await, "word 'owl' already exists");
    }

    #[tokio::test]
    async fn test_validation_error_is_plain_text() {
        let err = crate::validation::ValidationError::required(crate::validation::Field::Name);
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(
            response.headers()["content-type"]
                .to_str()
                .unwrap()
                .starts_with("text/plain")
        );
        assert_eq!(body_text(response).await, "\"name\" is required");
    }
}
