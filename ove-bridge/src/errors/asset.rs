use ove_types::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("asset not found: {name}")]
    NotFound { name: String },

    #[error("asset is not well-formed JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("asset could not be serialized: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("asset failed validation: {0}")]
    Validation(#[from] ValidationError),

    #[error("asset I/O failure: {0}")]
    Io(#[from] std::io::Error),
}
