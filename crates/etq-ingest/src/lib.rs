pub mod csv_load;

pub use csv_load::{load_records, parse_records};
