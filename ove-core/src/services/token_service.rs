use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::configs::settings::Auth;
use crate::errors::TokenError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub username: String,
    /// Unique token id, so two tokens issued in the same second still differ.
    pub jti: String,
    pub iss: String,
    pub iat: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
}

#[derive(Clone)]
pub struct TokenService {
    secret: String,
    issuer: String,
    audience: Option<String>,
    expiration: u64,
}

impl TokenService {
    pub fn new(auth: Auth) -> Self {
        Self {
            secret: auth.secret,
            issuer: auth.issuer,
            audience: auth.audience,
            expiration: auth.expiration,
        }
    }

    pub fn expiration(&self) -> u64 {
        self.expiration
    }

    /// Signs a token for `username`. Tokens without `expires_in` never expire
    /// and carry no `exp` claim at all.
    pub fn generate_token(
        &self,
        username: &str,
        expires_in: Option<u64>,
    ) -> Result<String, TokenError> {
        let iat = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|duration| duration.as_secs())
            .unwrap_or_default();

        let claims = TokenClaims {
            username: username.to_string(),
            jti: Uuid::new_v4().simple().to_string(),
            iss: self.issuer.clone(),
            iat,
            exp: expires_in.map(|seconds| iat + seconds),
            aud: self.audience.clone(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_ref()),
        )
        .map_err(TokenError::Signing)
    }

    pub fn generate_access_token(&self, username: &str) -> Result<String, TokenError> {
        self.generate_token(username, Some(self.expiration))
    }

    pub fn generate_refresh_token(&self, username: &str) -> Result<String, TokenError> {
        self.generate_token(username, None)
    }

    /// Decodes and verifies a token. Refresh tokens carry no `exp` claim, so
    /// callers pass `expect_expiry = false` to skip expiry validation for them.
    pub fn retrieve_token_claims(
        &self,
        token: &str,
        expect_expiry: bool,
    ) -> Result<TokenData<TokenClaims>, TokenError> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.issuer]);

        if let Some(audience) = &self.audience {
            validation.set_audience(&[audience]);
        } else {
            validation.validate_aud = false;
        }

        if !expect_expiry {
            validation.required_spec_claims.remove("exp");
            validation.validate_exp = false;
        }

        decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_ref()),
            &validation,
        )
        .map_err(TokenError::Verification)
    }
}
