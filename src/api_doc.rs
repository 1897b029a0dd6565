use utoipa::OpenApi;

use crate::handlers;
use crate::models::{HealthResponse, MatchResponse, WordRequest, WordResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "word-dictionary API",
        version = "1.0.0",
        description = "An in-memory word dictionary with fuzzy lookup"
    ),
    paths(
        handlers::health::health_handler,
        handlers::get::get_handler,
        handlers::create::create_handler,
        handlers::update::update_handler,
        handlers::search::search_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(
            WordRequest,
            WordResponse,
            MatchResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "words", description = "Dictionary operations")
    )
)]
pub struct ApiDoc;
