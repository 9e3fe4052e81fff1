use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Login name, unique per deployment
    pub username: String,
    /// Plain-text password, hashed server-side
    pub password: String,
}

/// Token pair returned by a successful login.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tokens {
    /// Short-lived access token
    pub access: String,
    /// Long-lived refresh token, no expiry claim
    pub refresh: String,
    /// Access token expiry instant
    #[serde(with = "time::serde::rfc3339")]
    pub expiry: OffsetDateTime,
}

/// Fresh access token minted from a refresh token.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
    #[serde(with = "time::serde::rfc3339")]
    pub expiry: OffsetDateTime,
}
