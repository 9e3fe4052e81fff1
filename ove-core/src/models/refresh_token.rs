use serde::{Deserialize, Serialize};

use super::Table;

/// One refresh token per user; a new login replaces the old token.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct RefreshToken {
    pub id: i32,
    pub user_id: i32,
    pub token: String,
}

#[derive(Clone)]
pub struct RefreshTokenTable;

impl Table for RefreshTokenTable {
    fn name(&self) -> &'static str {
        "refresh_tokens"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS refresh_tokens (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL UNIQUE,
                token TEXT NOT NULL,
                FOREIGN KEY (user_id) REFERENCES users (id) ON DELETE CASCADE
            );
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS refresh_tokens;")
    }
}
