pub mod refresh_token;
pub mod user;

pub use refresh_token::RefreshToken;
pub use user::User;

pub trait Table: Send + Sync {
    fn name(&self) -> &'static str;

    fn create(&self) -> String;

    fn dispose(&self) -> String;
}
