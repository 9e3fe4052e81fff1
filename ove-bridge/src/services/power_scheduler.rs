use std::sync::Arc;
use std::time::Duration as StdDuration;

use time::{Duration, OffsetDateTime, PrimitiveDateTime, Time};

use ove_types::schedule::{self, AutoSchedule, PowerMode};

use crate::services::hardware_service::HardwareService;
use crate::services::schedule_service::ScheduleService;

/// Re-evaluate the schedule at least this often, so edits made while a long
/// sleep is pending still take effect.
const POLL_INTERVAL: StdDuration = StdDuration::from_secs(60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerAction {
    Wake,
    Sleep,
}

/// Earliest upcoming wake or sleep instant across the enabled days, strictly
/// after `now`. `None` when the schedule has no usable time or no enabled
/// day.
pub fn next_transition(
    now: OffsetDateTime,
    schedule: &AutoSchedule,
) -> Option<(OffsetDateTime, PowerAction)> {
    let mut best: Option<(OffsetDateTime, PowerAction)> = None;

    let clocks = [
        (PowerAction::Wake, schedule.wake.as_deref()),
        (PowerAction::Sleep, schedule.sleep.as_deref()),
    ];

    for (action, clock) in clocks {
        let Some((hour, minute)) = clock.and_then(schedule::parse_clock) else {
            continue;
        };
        let Ok(at_time) = Time::from_hms(hour, minute, 0) else {
            continue;
        };

        // Today's slot may already be in the past, so look one week ahead.
        for day_offset in 0..=7i64 {
            let date = now.date() + Duration::days(day_offset);
            let day_index = date.weekday().number_days_from_sunday() as usize;

            if !schedule.schedule[day_index] {
                continue;
            }

            let at = PrimitiveDateTime::new(date, at_time).assume_offset(now.offset());

            if at <= now {
                continue;
            }

            if best.is_none_or(|(current, _)| at < current) {
                best = Some((at, action));
            }

            break;
        }
    }

    best
}

/// Background task driving the auto-power schedule.
///
/// Sleeps in bounded slices so schedule edits and mode switches are picked
/// up within one poll interval.
pub fn spawn(
    schedule_service: Arc<ScheduleService>,
    hardware_service: Arc<HardwareService>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            if schedule_service.mode() != PowerMode::Auto {
                tokio::time::sleep(POLL_INTERVAL).await;
                continue;
            }

            let Some(schedule) = schedule_service.get_auto_schedule() else {
                tokio::time::sleep(POLL_INTERVAL).await;
                continue;
            };

            let now = OffsetDateTime::now_utc();

            let Some((at, action)) = next_transition(now, &schedule) else {
                tokio::time::sleep(POLL_INTERVAL).await;
                continue;
            };

            let wait = (at - now).unsigned_abs();

            if wait > POLL_INTERVAL {
                tokio::time::sleep(POLL_INTERVAL).await;
                continue;
            }

            tokio::time::sleep(wait).await;
            apply(&hardware_service, action);
        }
    })
}

fn apply(hardware_service: &HardwareService, action: PowerAction) {
    match hardware_service.get_devices() {
        Ok(devices) => match action {
            PowerAction::Wake => {
                tracing::info!(devices = devices.len(), "waking display hardware")
            }
            PowerAction::Sleep => {
                tracing::info!(devices = devices.len(), "shutting down display hardware")
            }
        },
        Err(e) => tracing::error!("device roster unavailable for power transition: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    fn weekday_schedule(wake: &str, sleep: &str) -> AutoSchedule {
        AutoSchedule {
            wake: Some(wake.to_string()),
            sleep: Some(sleep.to_string()),
            // Monday to Friday
            schedule: [false, true, true, true, true, true, false],
        }
    }

    #[test]
    fn test_next_transition_prefers_same_day_wake() {
        // 2024-01-01 is a Monday.
        let now = datetime!(2024-01-01 06:00 UTC);
        let (at, action) = next_transition(now, &weekday_schedule("07:00", "23:00")).unwrap();

        assert_eq!(at, datetime!(2024-01-01 07:00 UTC));
        assert_eq!(action, PowerAction::Wake);
    }

    #[test]
    fn test_next_transition_past_wake_falls_to_sleep() {
        let now = datetime!(2024-01-01 12:00 UTC);
        let (at, action) = next_transition(now, &weekday_schedule("07:00", "23:00")).unwrap();

        assert_eq!(at, datetime!(2024-01-01 23:00 UTC));
        assert_eq!(action, PowerAction::Sleep);
    }

    #[test]
    fn test_next_transition_skips_disabled_days() {
        // Friday evening rolls over to Monday morning.
        let now = datetime!(2024-01-05 23:30 UTC);
        let (at, action) = next_transition(now, &weekday_schedule("07:00", "23:00")).unwrap();

        assert_eq!(at, datetime!(2024-01-08 07:00 UTC));
        assert_eq!(action, PowerAction::Wake);
    }

    #[test]
    fn test_next_transition_without_enabled_days() {
        let schedule = AutoSchedule {
            wake: Some("07:00".to_string()),
            sleep: Some("23:00".to_string()),
            schedule: [false; 7],
        };

        assert!(next_transition(datetime!(2024-01-01 06:00 UTC), &schedule).is_none());
    }

    #[test]
    fn test_next_transition_without_times() {
        let schedule = AutoSchedule {
            wake: None,
            sleep: None,
            schedule: [true; 7],
        };

        assert!(next_transition(datetime!(2024-01-01 06:00 UTC), &schedule).is_none());
    }

    #[test]
    fn test_next_transition_ignores_unparseable_clock() {
        let schedule = AutoSchedule {
            wake: Some("late".to_string()),
            sleep: Some("23:00".to_string()),
            schedule: [true; 7],
        };

        let (_, action) = next_transition(datetime!(2024-01-01 06:00 UTC), &schedule).unwrap();
        assert_eq!(action, PowerAction::Sleep);
    }
}
