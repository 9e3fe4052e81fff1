use std::sync::Arc;

use serde_json::Value;

use ove_bridge::api::BridgeController;
use ove_bridge::assets::AssetStore;
use ove_bridge::configs::settings::Settings;
use ove_bridge::services::power_scheduler;
use ove_bridge::services::{HardwareService, ScheduleService};
use ove_types::channels;

#[tokio::main]
async fn main() {
    let settings = Settings::new().expect("Failed to load settings.");

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let app_name = env!("CARGO_PKG_NAME").replace('-', "_");
            let level = settings.logger.level.as_str();

            format!("{app_name}={level}").into()
        }))
        .init();

    let store = AssetStore::new(&settings.assets.root);
    store.ensure_defaults().expect("Failed to seed asset directory.");

    let hardware_service = Arc::new(HardwareService::new(store));
    let schedule_service = Arc::new(ScheduleService::new());

    let controller = BridgeController::new(hardware_service.clone(), schedule_service.clone());

    match controller.dispatch(channels::GET_DEVICES, Value::Null) {
        Ok(devices) => tracing::info!(
            count = devices.as_array().map(Vec::len).unwrap_or_default(),
            "device roster loaded"
        ),
        Err(e) => tracing::error!("device roster unavailable: {e}"),
    }

    if let Some(name) = &settings.bridge.name {
        tracing::info!(bridge = name, "bridge ready");
    }

    let scheduler = power_scheduler::spawn(schedule_service, hardware_service);

    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal.");

    scheduler.abort();
}
