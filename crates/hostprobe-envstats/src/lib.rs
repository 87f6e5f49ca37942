mod error;
mod evaluate;
mod table;

pub use error::{Error, Result};
pub use evaluate::{Thresholds, evaluate};
pub use table::{Reading, parse_tables};
