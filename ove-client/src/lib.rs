pub mod fetch;

pub use fetch::{RequestOptions, SafeClient};
pub use reqwest::Method;
