use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;

use ove_types::hardware::{self, Device};

use crate::errors::AssetError;

/// File name of the device roster within the asset directory.
pub const HARDWARE_ASSET: &str = "hardware.json";

/// File-backed store for bridge assets.
///
/// Assets are whole-replace resources: a save serialises the complete value
/// and swaps it in with a rename, so readers never observe a torn file.
/// Concurrent writers are not coordinated; the last write wins.
#[derive(Debug, Clone)]
pub struct AssetStore {
    root: PathBuf,
}

impl AssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Reads and parses an asset without validating its shape.
    pub fn read_raw(&self, name: &str) -> Result<Value, AssetError> {
        let content = fs::read_to_string(self.path(name)).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                AssetError::NotFound {
                    name: name.to_string(),
                }
            } else {
                AssetError::Io(e)
            }
        })?;

        Ok(serde_json::from_str(&content)?)
    }

    /// Replaces an asset wholesale via a temp file and rename.
    pub fn write_raw(&self, name: &str, value: &Value) -> Result<(), AssetError> {
        fs::create_dir_all(&self.root)?;

        let path = self.path(name);
        let staged = self.path(&format!("{name}.tmp"));

        let content = serde_json::to_string_pretty(value).map_err(AssetError::Serialize)?;

        fs::write(&staged, content)?;
        fs::rename(&staged, &path)?;

        Ok(())
    }

    /// Returns the validated device roster.
    ///
    /// A malformed file is a hard failure; no partial roster is ever
    /// returned.
    pub fn get_devices(&self) -> Result<Vec<Device>, AssetError> {
        let raw = self.read_raw(HARDWARE_ASSET)?;

        Ok(hardware::validate_devices(&raw)?)
    }

    /// Overwrites the full device roster.
    pub fn save_devices(&self, devices: &[Device]) -> Result<(), AssetError> {
        let value = serde_json::to_value(devices).map_err(AssetError::Serialize)?;

        self.write_raw(HARDWARE_ASSET, &value)
    }

    /// Seeds an empty roster on first boot; an existing file is left alone.
    pub fn ensure_defaults(&self) -> Result<(), AssetError> {
        if !exists(&self.path(HARDWARE_ASSET)) {
            self.save_devices(&[])?;
        }

        Ok(())
    }
}

fn exists(path: &Path) -> bool {
    fs::metadata(path).is_ok()
}
