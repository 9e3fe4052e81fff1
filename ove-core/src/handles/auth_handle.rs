use std::sync::Arc;

use anyhow::anyhow;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::{Basic, Bearer};
use ove_types::auth::{RegisterRequest, TokenResponse, Tokens};
use time::{Duration, OffsetDateTime};

use crate::errors::{ApiError, AuthError};
use crate::models::User;
use crate::repositories::{RefreshTokenRepository, UserRepository};
use crate::services::{AuthService, TokenService};

#[derive(Clone)]
pub struct AuthState {
    pub auth_service: Arc<AuthService>,
    pub token_service: Arc<TokenService>,
    pub user_repository: Arc<UserRepository>,
    pub refresh_token_repository: Arc<RefreshTokenRepository>,
}

pub fn auth_router(auth_state: AuthState) -> Router {
    Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/token", post(issue_access_token))
        .with_state(auth_state)
}

#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Registration successful, return access token", body = String),
        (status = 409, description = "Username already exists"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn register(
    State(state): State<AuthState>,
    Json(body): Json<RegisterRequest>,
) -> Result<String, ApiError> {
    if body.username.is_empty() || body.password.is_empty() {
        return Err(AuthError::InvalidRequest.into());
    }

    if let Ok(Some(_)) = state.user_repository.find_by_username(&body.username).await {
        return Err(AuthError::UsernameExists.into());
    }

    let hash_password = state
        .auth_service
        .hash(&body.password)
        .map_err(|e| anyhow!("Failed to hash password: {}", e))?;

    let user = User {
        id: 0,
        username: body.username.clone(),
        password: hash_password,
    };

    let mut tx = state.user_repository.get_pool().begin().await?;

    let id = state.user_repository.create(&user, &mut tx).await?;

    tx.commit().await?;

    let created_user = state
        .user_repository
        .find_by_id(id)
        .await?
        .ok_or(AuthError::UserNotFound)?;

    let token = state
        .token_service
        .generate_access_token(&created_user.username)?;

    Ok(token)
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    security(
        ("basic_auth" = [])
    ),
    responses(
        (status = 200, description = "Login successful, return token pair", body = Tokens),
        (status = 404, description = "User not found"),
        (status = 401, description = "Invalid password"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn login(
    State(state): State<AuthState>,
    TypedHeader(credentials): TypedHeader<Authorization<Basic>>,
) -> Result<Json<Tokens>, ApiError> {
    let user = state
        .user_repository
        .find_by_username(credentials.username())
        .await?
        .ok_or(AuthError::UserNotFound)?;

    let result = state
        .auth_service
        .verify(&user.password, credentials.password())
        .map_err(|e| anyhow!("Failed to verify password: {}", e))?;

    if !result {
        return Err(AuthError::InvalidPassword.into());
    }

    let access = state.token_service.generate_access_token(&user.username)?;
    let refresh = state.token_service.generate_refresh_token(&user.username)?;

    state
        .refresh_token_repository
        .upsert(user.id, &refresh)
        .await?;

    let expiry =
        OffsetDateTime::now_utc() + Duration::seconds(state.token_service.expiration() as i64);

    Ok(Json(Tokens {
        access,
        refresh,
        expiry,
    }))
}

#[utoipa::path(
    post,
    path = "/api/auth/token",
    tag = "auth",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Issued a fresh access token", body = TokenResponse),
        (status = 401, description = "Unknown or invalid refresh token"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn issue_access_token(
    State(state): State<AuthState>,
    TypedHeader(bearer): TypedHeader<Authorization<Bearer>>,
) -> Result<Json<TokenResponse>, ApiError> {
    // Only refresh tokens we issued and still track may mint access tokens.
    state
        .refresh_token_repository
        .find_by_token(bearer.token())
        .await?
        .ok_or(AuthError::InvalidToken)?;

    let claims = state
        .token_service
        .retrieve_token_claims(bearer.token(), false)
        .map_err(|_| AuthError::InvalidToken)?
        .claims;

    let token = state.token_service.generate_access_token(&claims.username)?;

    let expiry =
        OffsetDateTime::now_utc() + Duration::seconds(state.token_service.expiration() as i64);

    Ok(Json(TokenResponse { token, expiry }))
}
