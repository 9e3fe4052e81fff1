//! Channel names shared between the bridge daemon and its UI shell.
//!
//! The shell invokes bridge operations by channel name; both sides must
//! agree on these strings.

pub const GET_DEVICES: &str = "get-devices";
pub const SAVE_DEVICE: &str = "save-device";
pub const DELETE_DEVICE: &str = "delete-device";
pub const GET_DEVICES_TO_AUTH: &str = "get-devices-auth";
pub const REGISTER_AUTH: &str = "edit-device-hardware-auth";

pub const GET_AUTO_SCHEDULE: &str = "get-auto-schedule";
pub const SET_AUTO_SCHEDULE: &str = "set-auto-schedule";
pub const CLEAR_SCHEDULE: &str = "clear-schedule";
pub const GET_MODE: &str = "get-mode";
