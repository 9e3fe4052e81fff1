pub mod api;
pub mod assets;
pub mod configs;
pub mod errors;
pub mod services;
