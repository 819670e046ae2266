// crates/citygeo-core/src/error.rs
use thiserror::Error;

/// Errors produced while loading or transforming city collections.
///
/// All variants are fatal: a failure aborts the run before any output
/// file is written. There is no retry and no partial-result recovery.
#[derive(Debug, Error)]
pub enum GeoJsonError {
    /// An input file does not exist or could not be opened.
    #[error("input not found: {0}")]
    NotFound(String),

    /// The input parsed as JSON but lacks the fields an operation needs
    /// (e.g. no top-level `features` array).
    #[error("malformed input: {0}")]
    Malformed(String),

    /// Valid JSON, wrong shape for the merge operation. The message names
    /// which of the two inputs is at fault.
    #[error("unexpected GeoJSON structure: {0}")]
    Structure(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GeoJsonError>;
