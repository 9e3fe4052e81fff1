use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("Failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),

    #[error("Failed to verify token: {0}")]
    Verification(#[source] jsonwebtoken::errors::Error),
}

impl TokenError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            TokenError::Signing(_) => StatusCode::INTERNAL_SERVER_ERROR,
            TokenError::Verification(_) => StatusCode::UNAUTHORIZED,
        }
    }
}
