use serde_json::Value as JsonValue;
use thiserror::Error;

/// A field of a dictionary entry that requests may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Description,
}

impl Field {
    /// Fields in the order they are checked
    pub const ALL: [Field; 2] = [Field::Name, Field::Description];

    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Description => "description",
        }
    }

    /// Inclusive character bounds
    fn bounds(self) -> (usize, usize) {
        match self {
            Field::Name => (2, 30),
            Field::Description => (3, 200),
        }
    }
}

/// The first rule a request violated
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: &str, message: String) -> Self {
        Self {
            field: field.to_string(),
            message,
        }
    }

    pub fn required(field: Field) -> Self {
        Self::new(field.key(), format!("\"{}\" is required", field.key()))
    }
}

/// Field values that passed validation
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Fields {
    name: Option<String>,
    description: Option<String>,
}

impl Fields {
    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Name => &mut self.name,
            Field::Description => &mut self.description,
        }
    }

    /// Take ownership of a field the caller listed as required.
    pub fn take(&mut self, field: Field) -> Result<String, ValidationError> {
        self.slot(field)
            .take()
            .ok_or_else(|| ValidationError::required(field))
    }
}

/// Validate `input` against the entry schema.
///
/// Only fields listed in `required` must be present; any field that is present
/// must satisfy its rules. Keys outside the schema are rejected. Checks run in
/// declared field order and stop at the first violation.
pub fn validate(input: &JsonValue, required: &[Field]) -> Result<Fields, ValidationError> {
    let object = input.as_object().ok_or_else(|| {
        ValidationError::new("value", "\"value\" must be of type object".to_string())
    })?;

    let mut fields = Fields::default();
    for field in Field::ALL {
        match object.get(field.key()) {
            None if required.contains(&field) => return Err(ValidationError::required(field)),
            None => {}
            Some(value) => *fields.slot(field) = Some(check_string(field, value)?),
        }
    }

    if let Some(unknown) = object
        .keys()
        .find(|key| Field::ALL.iter().all(|field| field.key() != key.as_str()))
    {
        return Err(ValidationError::new(
            unknown,
            format!("\"{}\" is not allowed", unknown),
        ));
    }

    Ok(fields)
}

fn check_string(field: Field, value: &JsonValue) -> Result<String, ValidationError> {
    let key = field.key();
    let text = value
        .as_str()
        .ok_or_else(|| ValidationError::new(key, format!("\"{}\" must be a string", key)))?;

    if text.is_empty() {
        return Err(ValidationError::new(
            key,
            format!("\"{}\" is not allowed to be empty", key),
        ));
    }

    let (min, max) = field.bounds();
    let length = text.chars().count();
    if length < min {
        return Err(ValidationError::new(
            key,
            format!("\"{}\" length must be at least {} characters long", key, min),
        ));
    }
    if length > max {
        return Err(ValidationError::new(
            key,
            format!(
                "\"{}\" length must be less than or equal to {} characters long",
                key, max
            ),
        ));
    }

    Ok(text.to_string())
}
