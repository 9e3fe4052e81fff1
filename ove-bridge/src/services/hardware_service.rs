use ove_types::hardware::{Device, DeviceAuth};

use crate::assets::AssetStore;
use crate::errors::{AssetError, BridgeError};

/// Roster operations over the asset store.
///
/// Every mutation rewrites the whole roster; there is no per-device merge.
pub struct HardwareService {
    store: AssetStore,
}

impl HardwareService {
    pub fn new(store: AssetStore) -> Self {
        Self { store }
    }

    pub fn get_devices(&self) -> Result<Vec<Device>, AssetError> {
        self.store.get_devices()
    }

    /// Devices that have not been through the pairing handshake yet.
    pub fn devices_to_auth(&self) -> Result<Vec<Device>, AssetError> {
        let devices = self.store.get_devices()?;

        Ok(devices.into_iter().filter(Device::needs_auth).collect())
    }

    /// Inserts the device, or replaces the roster entry with the same id.
    pub fn save_device(&self, device: Device) -> Result<(), AssetError> {
        let mut devices = self.store.get_devices()?;

        match devices.iter().position(|d| d.id == device.id) {
            Some(index) => devices[index] = device,
            None => devices.push(device),
        }

        self.store.save_devices(&devices)
    }

    /// Removing an unknown id is a no-op, matching the roster filter
    /// semantics of the shell.
    pub fn delete_device(&self, id: &str) -> Result<(), AssetError> {
        let mut devices = self.store.get_devices()?;
        devices.retain(|device| device.id != id);

        self.store.save_devices(&devices)
    }

    /// Marks a device as paired.
    pub fn register_auth(&self, id: &str) -> Result<(), BridgeError> {
        let mut devices = self.store.get_devices()?;

        let device = devices
            .iter_mut()
            .find(|device| device.id == id)
            .ok_or_else(|| BridgeError::UnknownDevice(id.to_string()))?;

        device.auth = Some(DeviceAuth::Registered(true));

        self.store.save_devices(&devices)?;

        Ok(())
    }
}
