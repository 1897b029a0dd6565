pub mod health;
pub mod get;
pub mod create;
pub mod update;
pub mod search;
pub mod delete;

pub use health::health_handler;
pub use get::get_handler;
pub use create::create_handler;
pub use update::update_handler;
pub use search::search_handler;
pub use delete::delete_handler;

use serde_json::{Map, Value as JsonValue};

/// Wrap a path segment as a `{"name": ...}` object for validation
pub(crate) fn name_param(name: String) -> JsonValue {
    let mut object = Map::new();
    object.insert("name".to_string(), JsonValue::String(name));
    JsonValue::Object(object)
}
