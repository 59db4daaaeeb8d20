use thiserror::Error;

/// Errors that reject an entire CSV load.
///
/// A load is all-or-nothing: any of these means zero records are committed
/// and the previously loaded set (if any) stays active.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoadError {
    /// A required column is absent from the header row.
    #[error("missing required header: {0}")]
    MissingHeader(String),
    /// A surviving row's quantity does not read as a number greater than zero.
    #[error("invalid quantity for record id: {id}")]
    InvalidQuantity {
        /// Id of the first offending record.
        id: String,
    },
    /// The raw text could not be read as CSV at all.
    #[error("malformed csv: {0}")]
    Malformed(String),
}

pub type Result<T> = std::result::Result<T, LoadError>;
