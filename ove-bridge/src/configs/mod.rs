pub mod settings;

pub use settings::{Assets, Bridge, Logger, Settings};
