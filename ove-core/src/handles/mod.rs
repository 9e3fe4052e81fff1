pub mod auth_handle;

pub use auth_handle::*;
