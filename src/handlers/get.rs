use crate::error::ApiError;
use crate::handlers::name_param;
use crate::models::WordResponse;
use crate::routes;
use crate::state::AppState;
use crate::validation::{self, Field};
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// GET /api/word/{name} handler - Look up a word's definition
#[utoipa::path(
    get,
    path = routes::WORD_ITEM,
    params(
        ("name" = String, Path, description = "Word to look up (2 to 30 characters)")
    ),
    responses(
        (status = 200, description = "Word found", body = WordResponse),
        (status = 400, description = "Invalid word", body = String, content_type = "text/plain"),
        (status = 404, description = "Word not found", body = String, content_type = "text/plain")
    ),
    tag = "words"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<(StatusCode, Json<WordResponse>), ApiError> {
    let mut fields = validation::validate(&name_param(name), &[Field::Name])?;
    let name = fields.take(Field::Name)?;

    match state.dictionary.get(&name) {
        Some(description) => {
            tracing::info!("Successfully retrieved word: {}", name);
            Ok((StatusCode::OK, Json(WordResponse { name, description })))
        }
        None => {
            tracing::info!("Word not found: {}", name);
            Err(ApiError::WordNotFound(name))
        }
    }
}
