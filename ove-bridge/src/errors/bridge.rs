use super::AssetError;

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("unknown device with id: {0}")]
    UnknownDevice(String),

    #[error("unknown channel: {0}")]
    UnknownChannel(String),

    #[error("invalid payload for channel {channel}: {message}")]
    InvalidPayload { channel: String, message: String },

    #[error("bridge call failed: {0}")]
    Call(String),

    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error("serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BridgeError {
    pub fn invalid_payload(channel: &str, error: impl std::fmt::Display) -> Self {
        Self::InvalidPayload {
            channel: channel.to_string(),
            message: error.to_string(),
        }
    }
}
