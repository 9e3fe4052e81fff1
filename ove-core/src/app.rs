use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::configs::{SchemaManager, Settings, Storage};
use crate::handles::{AuthState, auth_router};
use crate::repositories::{RefreshTokenRepository, UserRepository};
use crate::services::{AuthService, TokenService};

pub async fn create_app(settings: &Arc<Settings>) -> anyhow::Result<Router> {
    let storage = Arc::new(
        Storage::new(settings.database.clone(), SchemaManager::default()).await?,
    );

    let auth_service = Arc::new(AuthService::new());
    let token_service = Arc::new(TokenService::new(settings.auth.clone()));

    let auth_state = AuthState {
        auth_service,
        token_service,
        user_repository: Arc::new(UserRepository::new(storage.clone())),
        refresh_token_repository: Arc::new(RefreshTokenRepository::new(storage.clone())),
    };

    Ok(auth_router(auth_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()))
}
