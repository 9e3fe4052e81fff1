pub mod hardware_service;
pub mod power_scheduler;
pub mod schedule_service;

pub use hardware_service::HardwareService;
pub use power_scheduler::PowerAction;
pub use schedule_service::{ScheduleBridge, ScheduleForm, ScheduleFormController, ScheduleService};
