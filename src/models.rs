use serde::{Deserialize, Serialize};

use crate::dictionary::Entry;
use crate::similarity::BestMatch;

/// Request body for create and update operations
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct WordRequest {
    /// 2 to 30 characters
    pub name: String,
    /// 3 to 200 characters
    pub description: String,
}

/// A word and its definition
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct WordResponse {
    pub name: String,
    pub description: String,
}

impl From<Entry> for WordResponse {
    fn from(entry: Entry) -> Self {
        Self {
            name: entry.name,
            description: entry.description,
        }
    }
}

/// Response type for fuzzy lookups
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MatchResponse {
    /// Closest word, empty when the dictionary is empty
    pub target: String,
    /// Similarity between 0 and 1
    pub rating: f64,
}

impl From<BestMatch> for MatchResponse {
    fn from(best: BestMatch) -> Self {
        Self {
            target: best.target,
            rating: best.rating,
        }
    }
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub entries: usize,
}
