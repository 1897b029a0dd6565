use std::collections::HashMap;

use crate::error::ApiError;
use crate::models::MatchResponse;
use crate::routes;
use crate::similarity;
use crate::state::AppState;
use crate::validation::{self, Field};
use axum::{extract::Query, extract::State, http::StatusCode, Json};
use serde_json::{Map, Value as JsonValue};

/// GET /api/word?name=... handler - Find the closest known word
///
/// Scores every word against the query and returns the best one with its
/// rating. An empty dictionary yields an empty target rated 0.
#[utoipa::path(
    get,
    path = routes::WORDS,
    params(
        ("name" = String, Query, description = "Word to match (2 to 30 characters)")
    ),
    responses(
        (status = 200, description = "Closest word", body = MatchResponse),
        (status = 400, description = "Invalid query parameter", body = String, content_type = "text/plain")
    ),
    tag = "words"
)]
pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<(StatusCode, Json<MatchResponse>), ApiError> {
    let params: Map<String, JsonValue> = params
        .into_iter()
        .map(|(key, value)| (key, JsonValue::String(value)))
        .collect();
    let mut fields = validation::validate(&JsonValue::Object(params), &[Field::Name])?;
    let query = fields.take(Field::Name)?;

    let best = similarity::find_best_match(&query, state.dictionary.keys());

    tracing::info!(
        "Best match for '{}': '{}' (rating: {})",
        query,
        best.target,
        best.rating
    );
    Ok((StatusCode::OK, Json(best.into())))
}
