mod classify;
mod error;
mod record;
mod report;

pub use classify::classify;
pub use error::{Error, Result};
pub use record::{DeviceRecord, Drive};
pub use report::parse_report;
