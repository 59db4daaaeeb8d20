pub mod app;
pub mod filter;
pub mod notify;
pub mod replicate;
pub mod selection;

pub use app::{AppState, PRINT_FAILURE_MESSAGE, PRINT_SUCCESS_MESSAGE};
pub use filter::filter_records;
pub use notify::{DANGER_TIMEOUT, DEFAULT_TIMEOUT, Notice, NotificationCenter};
pub use replicate::expand;
pub use selection::SelectionSet;
