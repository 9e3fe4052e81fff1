pub mod auth;
pub mod channels;
pub mod hardware;
pub mod schedule;
pub mod validate;

pub use hardware::{Device, DeviceAuth, ServiceType};
pub use schedule::{AutoSchedule, PowerMode};
pub use validate::{Validate, ValidationError};
