use serde::de::DeserializeOwned;
use serde_json::Value;

/// Structural or semantic mismatch between a value and its expected shape.
///
/// The `path` names the offending field relative to the validated root,
/// e.g. `[3].port` for the fourth element of a device roster.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("validation failed at `{path}`: {message}")]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Error anchored at the validated root itself.
    pub fn root(message: impl Into<String>) -> Self {
        Self::new("$", message)
    }

    /// Re-anchors the error underneath an enclosing path segment.
    pub fn prefixed(self, prefix: &str) -> Self {
        let path = if self.path == "$" {
            prefix.to_string()
        } else if self.path.starts_with('[') {
            format!("{prefix}{}", self.path)
        } else {
            format!("{prefix}.{}", self.path)
        };

        Self { path, ..self }
    }
}

/// Semantic checks beyond what deserialization can enforce.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Non-throwing deserialization of `value` into `T`, reporting failures
/// against `path`.
pub fn from_value<T: DeserializeOwned>(path: &str, value: &Value) -> Result<T, ValidationError> {
    serde_json::from_value(value.clone()).map_err(|e| ValidationError::new(path, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixed_rewrites_root() {
        let error = ValidationError::root("expected an object").prefixed("[2]");
        assert_eq!(error.path, "[2]");
    }

    #[test]
    fn test_prefixed_joins_field_paths() {
        let error = ValidationError::new("port", "out of range").prefixed("[0]");
        assert_eq!(error.path, "[0].port");
    }

    #[test]
    fn test_prefixed_concatenates_index_paths() {
        let error = ValidationError::new("[1]", "bad element").prefixed("devices");
        assert_eq!(error.path, "devices[1]");
    }
}
