use std::sync::Arc;

use axum::Router;

use ove_core::configs::schema::SchemaManager;
use ove_core::configs::settings::{Auth, Database};
use ove_core::configs::storage::Storage;
use ove_core::handles::{AuthState, auth_router};
use ove_core::repositories::{RefreshTokenRepository, UserRepository};
use ove_core::services::{AuthService, TokenService};

pub struct MockApp {
    pub storage: Arc<Storage>,
    pub auth_service: Arc<AuthService>,
    pub token_service: Arc<TokenService>,
    pub router: Router,
}

impl MockApp {
    pub async fn new() -> Self {
        let storage = Arc::new(
            Storage::new(
                Database {
                    clean_start: true,
                    url: String::from("sqlite::memory:"),
                },
                SchemaManager::default(),
            )
            .await
            .unwrap(),
        );

        let auth_service = Arc::new(AuthService::new());
        let token_service = Arc::new(TokenService::new(Auth {
            secret: String::from("test"),
            expiration: 1000,
            issuer: String::from("ove-core"),
            audience: None,
        }));

        Self {
            storage,
            auth_service,
            token_service,
            router: Router::new(),
        }
    }

    pub fn with_auth_handle(mut self) -> Self {
        let auth_state = AuthState {
            auth_service: self.auth_service.clone(),
            token_service: self.token_service.clone(),
            user_repository: Arc::new(UserRepository::new(self.storage.clone())),
            refresh_token_repository: Arc::new(RefreshTokenRepository::new(self.storage.clone())),
        };

        self.router = self.router.merge(auth_router(auth_state));
        self
    }
}
