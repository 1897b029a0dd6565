use crate::error::ApiError;
use crate::models::{WordRequest, WordResponse};
use crate::routes;
use crate::state::AppState;
use crate::validation::{self, Field};
use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use serde_json::Value as JsonValue;

/// POST /api/word handler - Add a new word
#[utoipa::path(
    post,
    path = routes::WORDS,
    request_body = WordRequest,
    responses(
        (status = 201, description = "Word created", body = WordResponse),
        (status = 400, description = "Invalid fields or invalid JSON", body = String, content_type = "text/plain"),
        (status = 415, description = "Body is not sent as application/json", body = String, content_type = "text/plain"),
        (status = 409, description = "Word already exists", body = String, content_type = "text/plain")
    ),
    tag = "words"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    payload: Result<Json<JsonValue>, JsonRejection>,
) -> Result<(StatusCode, Json<WordResponse>), ApiError> {
    let Json(body) = payload?;
    let mut fields = validation::validate(&body, &[Field::Name, Field::Description])?;
    let name = fields.take(Field::Name)?;
    let description = fields.take(Field::Description)?;

    let entry = state.dictionary.create(name, description)?;

    tracing::info!("Successfully created word: {}", entry.name);
    Ok((StatusCode::CREATED, Json(entry.into())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use axum::{body::Body, http::Request, Router};
    use tower::ServiceExt;

    fn setup_test_app() -> (Router, Dictionary) {
        let dictionary = Dictionary::seeded();
        let app = routes::router(AppState::new(dictionary.clone()));
        (app, dictionary)
    }

    fn post_word(body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/word")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(body.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_create_endpoint_success() {
        let (app, dictionary) = setup_test_app();

        let test_data = serde_json::json!({"name": "owl", "description": "a bird"});
        let response = app
            .oneshot(post_word(test_data.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let response_json: WordResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response_json.name, "owl");
        assert_eq!(response_json.description, "a bird");
        assert_eq!(dictionary.get("owl").as_deref(), Some("a bird"));
    }

    #[tokio::test]
    async fn test_create_endpoint_conflict() {
        let (app, dictionary) = setup_test_app();

        let test_data = serde_json::json!({"name": "knight", "description": "a chess piece"});
        let response = app
            .oneshot(post_word(test_data.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(body_text(response).await, "word 'knight' already exists");
        assert_eq!(dictionary.get("knight").as_deref(), Some("a man in armor"));
    }

    #[tokio::test]
    async fn test_create_endpoint_missing_description() {
        let (app, dictionary) = setup_test_app();

        let test_data = serde_json::json!({"name": "owl"});
        let response = app
            .oneshot(post_word(test_data.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "\"description\" is required");
        assert!(!dictionary.exists("owl"));
    }

    #[tokio::test]
    async fn test_create_endpoint_invalid_name() {
        let (app, _) = setup_test_app();

        let test_data = serde_json::json!({"name": "o", "description": "a bird"});
        let response = app
            .oneshot(post_word(test_data.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_text(response).await.contains("\"name\""));
    }

    #[tokio::test]
    async fn test_create_endpoint_invalid_json() {
        let (app, _) = setup_test_app();

        let response = app
            .oneshot(post_word("{invalid json}".to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_endpoint_missing_content_type() {
        let (app, dictionary) = setup_test_app();

        let test_data = serde_json::json!({"name": "owl", "description": "a bird"});
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/word")
                    .body(Body::from(test_data.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert!(
            response.headers()["content-type"]
                .to_str()
                .unwrap()
                .starts_with("text/plain")
        );
        assert!(!body_text(response).await.is_empty());
        assert!(!dictionary.exists("owl"));
    }
}
