use serde_json::{Map, Value};

/// Flat string-keyed argument map handed to a single tool invocation.
///
/// Callers send loosely typed JSON; every component converts the map into
/// its own typed input struct at the boundary before any scoring runs.
/// Numeric fields accept JSON numbers as well as numeric strings, since
/// upstream tool dispatchers frequently stringify everything.
#[derive(Debug, Clone, Default)]
pub struct ToolArguments(Map<String, Value>);

/// Boundary failure converting an argument map into a typed input.
///
/// Never escalates: components surface these as `{"error": "..."}` results
/// and the process carries on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Field '{0}' must be a number")]
    MalformedNumber(&'static str),
    #[error("Arguments must be a JSON object")]
    NotAnObject,
}

impl ToolArguments {
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn from_value(value: Value) -> Result<Self, ArgumentError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(ArgumentError::NotAnObject),
        }
    }

    /// A field counts as present when it exists, is not null, and is not a
    /// blank string.
    pub fn is_present(&self, field: &str) -> bool {
        match self.0.get(field) {
            None | Some(Value::Null) => false,
            Some(Value::String(text)) => !text.trim().is_empty(),
            Some(_) => true,
        }
    }

    pub fn optional_str(&self, field: &str) -> Option<&str> {
        match self.0.get(field) {
            Some(Value::String(text)) => {
                let trimmed = text.trim();
                (!trimmed.is_empty()).then_some(trimmed)
            }
            _ => None,
        }
    }

    pub fn require_str(&self, field: &'static str) -> Result<String, ArgumentError> {
        self.optional_str(field)
            .map(str::to_string)
            .ok_or(ArgumentError::MissingField(field))
    }

    /// `None` when the field is absent; `Malformed` when it is present but
    /// not interpretable as a number.
    pub fn optional_f64(&self, field: &'static str) -> Result<Option<f64>, ArgumentError> {
        match self.0.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(number)) => Ok(number.as_f64()),
            Some(Value::String(text)) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                trimmed
                    .parse::<f64>()
                    .map(Some)
                    .map_err(|_| ArgumentError::MalformedNumber(field))
            }
            Some(_) => Err(ArgumentError::MalformedNumber(field)),
        }
    }

    pub fn require_f64(&self, field: &'static str) -> Result<f64, ArgumentError> {
        self.optional_f64(field)?
            .ok_or(ArgumentError::MissingField(field))
    }

    pub fn optional_i64(&self, field: &'static str) -> Result<Option<i64>, ArgumentError> {
        Ok(self.optional_f64(field)?.map(|value| value as i64))
    }

    pub fn require_i64(&self, field: &'static str) -> Result<i64, ArgumentError> {
        Ok(self.require_f64(field)? as i64)
    }
}

impl From<Map<String, Value>> for ToolArguments {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
