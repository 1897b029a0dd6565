use crate::dictionary::Dictionary;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub dictionary: Dictionary,
}

impl AppState {
    pub fn new(dictionary: Dictionary) -> Self {
        Self { dictionary }
    }
}
