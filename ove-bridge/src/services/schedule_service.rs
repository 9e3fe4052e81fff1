use std::sync::Mutex;

use async_trait::async_trait;

use ove_types::schedule::{AutoSchedule, DAYS_PER_WEEK, PowerMode};

use crate::errors::BridgeError;

#[derive(Debug, Default)]
struct ScheduleState {
    mode: PowerMode,
    auto_schedule: Option<AutoSchedule>,
}

/// Bridge-owned power schedule state.
///
/// The stored auto schedule survives mode switches, so re-entering auto mode
/// without a new schedule re-arms the previous one.
#[derive(Debug, Default)]
pub struct ScheduleService {
    state: Mutex<ScheduleState>,
}

impl ScheduleService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> PowerMode {
        self.state.lock().unwrap().mode
    }

    pub fn get_auto_schedule(&self) -> Option<AutoSchedule> {
        self.state.lock().unwrap().auto_schedule.clone()
    }

    /// Stores the schedule. A `None` payload re-arms the stored schedule and
    /// switches to auto mode; a provided schedule is stored but only takes
    /// effect immediately when auto mode is already active. Returns the
    /// schedule now driving auto mode, if any.
    pub fn set_auto_schedule(&self, schedule: Option<AutoSchedule>) -> Option<AutoSchedule> {
        let mut state = self.state.lock().unwrap();

        if let Some(schedule) = schedule {
            state.auto_schedule = Some(schedule);

            // Saving a schedule while in manual mode does not activate it.
            if state.mode != PowerMode::Auto {
                return None;
            }
        }

        state.mode = PowerMode::Auto;
        state.auto_schedule.clone()
    }

    /// Back to manual control; the stored schedule is kept but inert.
    pub fn clear_schedule(&self) {
        self.state.lock().unwrap().mode = PowerMode::Manual;
    }
}

/// Host capability the schedule form reads its initial state from.
#[async_trait]
pub trait ScheduleBridge: Send + Sync {
    async fn get_auto_schedule(&self) -> Result<Option<AutoSchedule>, BridgeError>;
}

#[async_trait]
impl ScheduleBridge for ScheduleService {
    async fn get_auto_schedule(&self) -> Result<Option<AutoSchedule>, BridgeError> {
        Ok(ScheduleService::get_auto_schedule(self))
    }
}

/// Editable schedule form state: wake time, sleep time, day selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleForm {
    pub start: String,
    pub end: String,
    pub days: [bool; DAYS_PER_WEEK],
}

impl Default for ScheduleForm {
    fn default() -> Self {
        Self {
            start: String::new(),
            end: String::new(),
            days: [false; DAYS_PER_WEEK],
        }
    }
}

impl ScheduleForm {
    /// All three fields in one step; an absent schedule hydrates to the
    /// defaults.
    pub fn from_schedule(schedule: Option<AutoSchedule>) -> Self {
        match schedule {
            Some(schedule) => Self {
                start: schedule.wake.unwrap_or_default(),
                end: schedule.sleep.unwrap_or_default(),
                days: schedule.schedule,
            },
            None => Self::default(),
        }
    }
}

/// Owns the form for one mount of the schedule editor.
///
/// Hydration queries the bridge at most once; a failed call leaves the form
/// at its defaults and unhydrated, so the owner may retry on a later mount.
#[derive(Debug, Default)]
pub struct ScheduleFormController {
    form: ScheduleForm,
    hydrated: bool,
}

impl ScheduleFormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &ScheduleForm {
        &self.form
    }

    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    pub async fn ensure_hydrated(&mut self, bridge: &dyn ScheduleBridge) -> Result<(), BridgeError> {
        if self.hydrated {
            return Ok(());
        }

        let schedule = bridge.get_auto_schedule().await?;

        self.form = ScheduleForm::from_schedule(schedule);
        self.hydrated = true;

        Ok(())
    }
}
