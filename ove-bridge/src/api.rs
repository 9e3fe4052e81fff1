use std::sync::Arc;

use serde_json::Value;

use ove_types::channels;
use ove_types::hardware::Device;
use ove_types::schedule::AutoSchedule;
use ove_types::validate::Validate;

use crate::errors::BridgeError;
use crate::services::{HardwareService, ScheduleService};

/// Channel-name dispatch for the bridge API.
///
/// The UI shell addresses bridge operations by the channel strings in
/// [`ove_types::channels`]; this maps each onto the owning service. Payloads
/// are validated before any state changes.
pub struct BridgeController {
    hardware_service: Arc<HardwareService>,
    schedule_service: Arc<ScheduleService>,
}

impl BridgeController {
    pub fn new(
        hardware_service: Arc<HardwareService>,
        schedule_service: Arc<ScheduleService>,
    ) -> Self {
        Self {
            hardware_service,
            schedule_service,
        }
    }

    pub fn dispatch(&self, channel: &str, payload: Value) -> Result<Value, BridgeError> {
        match channel {
            channels::GET_DEVICES => Ok(serde_json::to_value(
                self.hardware_service.get_devices()?,
            )?),
            channels::GET_DEVICES_TO_AUTH => Ok(serde_json::to_value(
                self.hardware_service.devices_to_auth()?,
            )?),
            channels::SAVE_DEVICE => {
                let device: Device = serde_json::from_value(payload)
                    .map_err(|e| BridgeError::invalid_payload(channel, e))?;
                device
                    .validate()
                    .map_err(|e| BridgeError::invalid_payload(channel, e))?;

                self.hardware_service.save_device(device)?;

                Ok(Value::Null)
            }
            channels::DELETE_DEVICE => {
                let id: String = serde_json::from_value(payload)
                    .map_err(|e| BridgeError::invalid_payload(channel, e))?;

                self.hardware_service.delete_device(&id)?;

                Ok(Value::Null)
            }
            channels::REGISTER_AUTH => {
                let id: String = serde_json::from_value(payload)
                    .map_err(|e| BridgeError::invalid_payload(channel, e))?;

                self.hardware_service.register_auth(&id)?;

                Ok(Value::Bool(true))
            }
            channels::GET_AUTO_SCHEDULE => Ok(serde_json::to_value(
                self.schedule_service.get_auto_schedule(),
            )?),
            channels::SET_AUTO_SCHEDULE => {
                let schedule: Option<AutoSchedule> = serde_json::from_value(payload)
                    .map_err(|e| BridgeError::invalid_payload(channel, e))?;

                if let Some(schedule) = &schedule {
                    schedule
                        .validate()
                        .map_err(|e| BridgeError::invalid_payload(channel, e))?;
                }

                self.schedule_service.set_auto_schedule(schedule);

                Ok(Value::Null)
            }
            channels::CLEAR_SCHEDULE => {
                self.schedule_service.clear_schedule();

                Ok(Value::Null)
            }
            channels::GET_MODE => Ok(serde_json::to_value(self.schedule_service.mode())?),
            _ => Err(BridgeError::UnknownChannel(channel.to_string())),
        }
    }
}
