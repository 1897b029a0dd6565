use crate::error::ApiError;
use crate::models::{WordRequest, WordResponse};
use crate::routes;
use crate::state::AppState;
use crate::validation::{self, Field};
use axum::{extract::rejection::JsonRejection, extract::Path, extract::State, http::StatusCode, Json};
use serde_json::Value as JsonValue;

/// PUT /api/word/{name} handler - Set a word's definition
///
/// Overwrites the definition when the word exists and adds it otherwise.
/// The word is taken from the body `name`; the path segment only addresses
/// the resource.
#[utoipa::path(
    put,
    path = routes::WORD_ITEM,
    params(
        ("name" = String, Path, description = "Word addressed by the request; the body `name` is the one stored")
    ),
    request_body = WordRequest,
    responses(
        (status = 200, description = "Definition stored", body = WordResponse),
        (status = 400, description = "Invalid fields or invalid JSON", body = String, content_type = "text/plain"),
        (status = 415, description = "Body is not sent as application/json", body = String, content_type = "text/plain")
    ),
    tag = "words"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(path_name): Path<String>,
    payload: Result<Json<JsonValue>, JsonRejection>,
) -> Result<(StatusCode, Json<WordResponse>), ApiError> {
    let Json(body) = payload?;
    let mut fields = validation::validate(&body, &[Field::Name, Field::Description])?;
    let name = fields.take(Field::Name)?;
    let description = fields.take(Field::Description)?;

    if name != path_name {
        tracing::debug!("Body word '{}' differs from path '{}'", name, path_name);
    }

    let existed = state.dictionary.exists(&name);
    let entry = state.dictionary.update(name, description);

    if existed {
        tracing::info!("Successfully updated word: {}", entry.name);
    } else {
        tracing::info!("Successfully added word on update: {}", entry.name);
    }
    Ok((StatusCode::OK, Json(entry.into())))
}
