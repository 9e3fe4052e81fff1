use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validate::{self, Validate, ValidationError};

/// Control protocol family a device speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    /// OVE client node controlled over HTTP
    Node,
    /// Samsung MDC display
    Mdc,
    /// PJLink projector
    Pjlink,
}

/// Authorisation state of a device.
///
/// `Credentials` carries explicit login details, `Registered` records the
/// outcome of a pairing handshake. A device whose `auth` field is absent has
/// not been authorised at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DeviceAuth {
    Credentials { username: String, password: String },
    Registered(bool),
}

/// One piece of controllable display hardware known to a bridge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: String,
    pub description: String,
    pub ip: String,
    pub port: u16,
    pub protocol: String,
    #[serde(rename = "type")]
    pub service_type: ServiceType,
    pub mac: String,
    pub tags: Vec<String>,
    pub auth: Option<DeviceAuth>,
}

impl Device {
    /// Devices without any auth record still need to be paired.
    pub fn needs_auth(&self) -> bool {
        self.auth.is_none()
    }
}

impl Validate for Device {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::new("id", "must not be empty"));
        }

        if self.ip.is_empty() {
            return Err(ValidationError::new("ip", "must not be empty"));
        }

        if self.port == 0 {
            return Err(ValidationError::new("port", "must be non-zero"));
        }

        if !is_mac_address(&self.mac) {
            return Err(ValidationError::new(
                "mac",
                format!("`{}` is not a hardware address", self.mac),
            ));
        }

        Ok(())
    }
}

fn is_mac_address(value: &str) -> bool {
    let groups: Vec<&str> = if value.contains(':') {
        value.split(':').collect()
    } else {
        value.split('-').collect()
    };

    groups.len() == 6
        && groups
            .iter()
            .all(|group| group.len() == 2 && group.chars().all(|c| c.is_ascii_hexdigit()))
}

/// Validates a single device value, reporting the offending field on failure.
pub fn validate_device(value: &Value) -> Result<Device, ValidationError> {
    let device: Device = validate::from_value("$", value)?;
    device.validate()?;

    Ok(device)
}

/// Validates a whole device roster. Succeeds only if every element matches
/// the device shape; the error names the first offending element.
pub fn validate_devices(value: &Value) -> Result<Vec<Device>, ValidationError> {
    let items = value
        .as_array()
        .ok_or_else(|| ValidationError::root("expected an array of devices"))?;

    let mut devices = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        let path = format!("[{index}]");
        let device: Device = validate::from_value(&path, item)?;
        device.validate().map_err(|e| e.prefixed(&path))?;
        devices.push(device);
    }

    Ok(devices)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sample_device() -> Value {
        json!({
            "id": "left-wall",
            "description": "Left video wall column",
            "ip": "10.0.0.12",
            "port": 3333,
            "protocol": "http",
            "type": "node",
            "mac": "00:1B:44:11:3A:B7",
            "tags": ["wall", "left"],
            "auth": null
        })
    }

    #[test]
    fn test_validate_devices_accepts_well_formed_roster() {
        let devices = validate_devices(&json!([sample_device()])).unwrap();

        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].id, "left-wall");
        assert_eq!(devices[0].service_type, ServiceType::Node);
        assert!(devices[0].needs_auth());
    }

    #[test]
    fn test_validate_devices_rejects_non_array() {
        let error = validate_devices(&json!({"id": "x"})).unwrap_err();

        assert_eq!(error.path, "$");
    }

    #[test]
    fn test_validate_devices_names_offending_element() {
        let mut bad = sample_device();
        bad["mac"] = json!("not-a-mac");
        let error = validate_devices(&json!([sample_device(), bad])).unwrap_err();

        assert_eq!(error.path, "[1].mac");
    }

    #[test]
    fn test_validate_devices_rejects_missing_field() {
        let mut bad = sample_device();
        bad.as_object_mut().unwrap().remove("ip");
        let error = validate_devices(&json!([bad])).unwrap_err();

        assert_eq!(error.path, "[0]");
        assert!(error.message.contains("ip"));
    }

    #[test]
    fn test_auth_union_roundtrip() {
        let credentials = json!({"username": "ove", "password": "secret"});
        let parsed: DeviceAuth = serde_json::from_value(credentials).unwrap();
        assert!(matches!(parsed, DeviceAuth::Credentials { .. }));

        let flag: DeviceAuth = serde_json::from_value(json!(true)).unwrap();
        assert_eq!(flag, DeviceAuth::Registered(true));
    }

    #[test]
    fn test_service_type_wire_format() {
        assert_eq!(
            serde_json::to_value(ServiceType::Pjlink).unwrap(),
            json!("pjlink")
        );
    }
}
