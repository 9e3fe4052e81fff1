pub mod asset;
pub mod bridge;

pub use asset::AssetError;
pub use bridge::BridgeError;
