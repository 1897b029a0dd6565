use crate::error::ApiError;
use crate::handlers::name_param;
use crate::routes;
use crate::state::AppState;
use crate::validation::{self, Field};
use axum::{extract::Path, extract::State, http::StatusCode};

/// DELETE /api/word/{name} handler - Remove a word
#[utoipa::path(
    delete,
    path = routes::WORD_ITEM,
    params(
        ("name" = String, Path, description = "Word to remove (2 to 30 characters)")
    ),
    responses(
        (status = 200, description = "Word removed"),
        (status = 400, description = "Invalid word", body = String, content_type = "text/plain"),
        (status = 404, description = "Word not found", body = String, content_type = "text/plain")
    ),
    tag = "words"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, ApiError> {
    let name = validation::validate(&name_param(name), &[Field::Name])?.take(Field::Name)?;

    state.dictionary.delete(&name)?;

    tracing::info!("Successfully deleted word: {}", name);
    Ok(StatusCode::OK)
}
