pub mod error;
pub mod record;

pub use error::{LoadError, Result};
pub use record::{REQUIRED_HEADERS, Record, Severity};
