use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::{Value, json};

use ove_types::channels;
use ove_types::schedule::{AutoSchedule, PowerMode};

use ove_bridge::api::BridgeController;
use ove_bridge::assets::AssetStore;
use ove_bridge::errors::BridgeError;
use ove_bridge::services::{
    HardwareService, ScheduleBridge, ScheduleForm, ScheduleFormController, ScheduleService,
};

struct MockBridge {
    schedule: Option<AutoSchedule>,
    fail: bool,
    calls: AtomicUsize,
}

impl MockBridge {
    fn with_schedule(schedule: Option<AutoSchedule>) -> Self {
        Self {
            schedule,
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            schedule: None,
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ScheduleBridge for MockBridge {
    async fn get_auto_schedule(&self) -> Result<Option<AutoSchedule>, BridgeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(BridgeError::Call("bridge offline".to_string()));
        }

        Ok(self.schedule.clone())
    }
}

fn sample_schedule() -> AutoSchedule {
    AutoSchedule {
        wake: Some("07:00".to_string()),
        sleep: Some("23:00".to_string()),
        schedule: [true, false, false, false, false, false, true],
    }
}

#[tokio::test]
async fn test_hydration_fills_all_three_fields() {
    let bridge = MockBridge::with_schedule(Some(sample_schedule()));
    let mut controller = ScheduleFormController::new();

    controller.ensure_hydrated(&bridge).await.unwrap();

    assert_eq!(
        controller.form(),
        &ScheduleForm {
            start: "07:00".to_string(),
            end: "23:00".to_string(),
            days: [true, false, false, false, false, false, true],
        }
    );
}

#[tokio::test]
async fn test_hydration_defaults_when_schedule_absent() {
    let bridge = MockBridge::with_schedule(None);
    let mut controller = ScheduleFormController::new();

    controller.ensure_hydrated(&bridge).await.unwrap();

    assert_eq!(controller.form(), &ScheduleForm::default());
    assert_eq!(controller.form().days, [false; 7]);
    assert!(controller.is_hydrated());
}

#[tokio::test]
async fn test_hydration_runs_once_per_mount() {
    let bridge = MockBridge::with_schedule(Some(sample_schedule()));
    let mut controller = ScheduleFormController::new();

    controller.ensure_hydrated(&bridge).await.unwrap();
    controller.ensure_hydrated(&bridge).await.unwrap();

    assert_eq!(bridge.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_failed_hydration_keeps_defaults_and_allows_retry() {
    let bridge = MockBridge::failing();
    let mut controller = ScheduleFormController::new();

    let error = controller.ensure_hydrated(&bridge).await.unwrap_err();
    assert!(matches!(error, BridgeError::Call(_)));

    assert_eq!(controller.form(), &ScheduleForm::default());
    assert!(!controller.is_hydrated());

    // The failed attempt did not burn the one-shot guard.
    let bridge = MockBridge::with_schedule(Some(sample_schedule()));
    controller.ensure_hydrated(&bridge).await.unwrap();
    assert!(controller.is_hydrated());
}

#[tokio::test]
async fn test_saving_schedule_in_manual_mode_keeps_manual() {
    let service = ScheduleService::new();
    assert_eq!(service.mode(), PowerMode::Manual);

    // The schedule is stored for later but nothing is armed.
    let active = service.set_auto_schedule(Some(sample_schedule()));

    assert_eq!(service.mode(), PowerMode::Manual);
    assert_eq!(active, None);
    assert_eq!(service.get_auto_schedule(), Some(sample_schedule()));
}

#[tokio::test]
async fn test_saving_schedule_in_auto_mode_applies_immediately() {
    let service = ScheduleService::new();
    service.set_auto_schedule(None);
    assert_eq!(service.mode(), PowerMode::Auto);

    let active = service.set_auto_schedule(Some(sample_schedule()));

    assert_eq!(active, Some(sample_schedule()));
    assert_eq!(service.mode(), PowerMode::Auto);
}

#[tokio::test]
async fn test_schedule_service_rearms_stored_schedule() {
    let service = ScheduleService::new();

    // Store while manual, then drop into auto mode without a payload.
    service.set_auto_schedule(Some(sample_schedule()));
    assert_eq!(service.mode(), PowerMode::Manual);

    let active = service.set_auto_schedule(None);
    assert_eq!(active, Some(sample_schedule()));
    assert_eq!(service.mode(), PowerMode::Auto);

    service.clear_schedule();
    assert_eq!(service.mode(), PowerMode::Manual);

    // Re-entering auto mode restores the same stored schedule.
    let active = service.set_auto_schedule(None);
    assert_eq!(active, Some(sample_schedule()));
    assert_eq!(service.mode(), PowerMode::Auto);
}

fn controller() -> (tempfile::TempDir, BridgeController) {
    let dir = tempfile::tempdir().unwrap();
    let store = AssetStore::new(dir.path().join("assets"));
    store.ensure_defaults().unwrap();

    let controller = BridgeController::new(
        Arc::new(HardwareService::new(store)),
        Arc::new(ScheduleService::new()),
    );

    (dir, controller)
}

#[tokio::test]
async fn test_dispatch_schedule_channels() {
    let (_dir, controller) = controller();

    let stored = controller
        .dispatch(channels::GET_AUTO_SCHEDULE, Value::Null)
        .unwrap();
    assert_eq!(stored, Value::Null);

    controller
        .dispatch(
            channels::SET_AUTO_SCHEDULE,
            serde_json::to_value(sample_schedule()).unwrap(),
        )
        .unwrap();

    // Saving from manual mode stores the schedule without arming it.
    let mode = controller.dispatch(channels::GET_MODE, Value::Null).unwrap();
    assert_eq!(mode, json!("manual"));

    controller
        .dispatch(channels::SET_AUTO_SCHEDULE, Value::Null)
        .unwrap();

    let mode = controller.dispatch(channels::GET_MODE, Value::Null).unwrap();
    assert_eq!(mode, json!("auto"));

    let stored = controller
        .dispatch(channels::GET_AUTO_SCHEDULE, Value::Null)
        .unwrap();
    assert_eq!(stored["wake"], json!("07:00"));
}

#[tokio::test]
async fn test_dispatch_rejects_invalid_schedule_payload() {
    let (_dir, controller) = controller();

    let error = controller
        .dispatch(channels::SET_AUTO_SCHEDULE, json!({"wake": "sometime"}))
        .unwrap_err();

    assert!(matches!(error, BridgeError::InvalidPayload { .. }));
}

#[tokio::test]
async fn test_dispatch_unknown_channel() {
    let (_dir, controller) = controller();

    let error = controller.dispatch("open-pod-bay-doors", Value::Null).unwrap_err();

    assert!(matches!(error, BridgeError::UnknownChannel(_)));
}
