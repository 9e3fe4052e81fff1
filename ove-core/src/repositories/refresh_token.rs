use std::sync::Arc;

use sqlx::Error;

use crate::configs::Storage;
use crate::models::RefreshToken;

pub struct RefreshTokenRepository {
    storage: Arc<Storage>,
}

impl RefreshTokenRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    /// Stores the user's current refresh token, replacing any previous one.
    pub async fn upsert(&self, user_id: i32, token: &str) -> Result<(), Error> {
        sqlx::query(
            r#"
            INSERT INTO refresh_tokens (user_id, token)
            VALUES ($1, $2)
            ON CONFLICT (user_id) DO UPDATE SET token = excluded.token
            "#,
        )
        .bind(user_id)
        .bind(token)
        .execute(self.storage.get_pool())
        .await?;

        Ok(())
    }

    pub async fn find_by_token(&self, token: &str) -> Result<Option<RefreshToken>, Error> {
        let record: Option<RefreshToken> =
            sqlx::query_as("SELECT * FROM refresh_tokens WHERE token = $1")
                .bind(token)
                .fetch_optional(self.storage.get_pool())
                .await?;

        Ok(record)
    }
}
