use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validate::{self, Validate, ValidationError};

pub const DAYS_PER_WEEK: usize = 7;

/// How the bridge decides when to power the wall up and down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerMode {
    #[default]
    Manual,
    Auto,
    Eco,
}

/// Weekly auto-power schedule.
///
/// `schedule` is Sunday-first; a `true` entry means auto-power is active on
/// that day. Wake and sleep times use the wall-clock `HH:MM` form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoSchedule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wake: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep: Option<String>,
    #[serde(default)]
    pub schedule: [bool; DAYS_PER_WEEK],
}

impl Validate for AutoSchedule {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(wake) = &self.wake {
            parse_clock(wake)
                .ok_or_else(|| ValidationError::new("wake", format!("`{wake}` is not HH:MM")))?;
        }

        if let Some(sleep) = &self.sleep {
            parse_clock(sleep)
                .ok_or_else(|| ValidationError::new("sleep", format!("`{sleep}` is not HH:MM")))?;
        }

        Ok(())
    }
}

/// Parses a `HH:MM` wall-clock string.
pub fn parse_clock(value: &str) -> Option<(u8, u8)> {
    let (hour, minute) = value.split_once(':')?;
    let hour: u8 = hour.parse().ok()?;
    let minute: u8 = minute.parse().ok()?;

    (hour < 24 && minute < 60).then_some((hour, minute))
}

/// Schema function for an optional auto schedule, as stored by the bridge.
pub fn validate_auto_schedule(value: &Value) -> Result<Option<AutoSchedule>, ValidationError> {
    let schedule: Option<AutoSchedule> = validate::from_value("$", value)?;

    if let Some(schedule) = &schedule {
        schedule.validate()?;
    }

    Ok(schedule)
}
