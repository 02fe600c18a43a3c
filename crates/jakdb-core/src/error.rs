// crates/jakdb-core/src/error.rs
use thiserror::Error;

/// Errors produced by the loader and the proximity ranker.
///
/// Empty filter criteria and empty result sets are values, never errors;
/// individual malformed records are tolerated by the loader (missing or
/// unparseable optional fields become absent). Only the dataset transport
/// layer and an out-of-range reference point surface here.
#[derive(Debug, Error)]
pub enum JakDbError {
    /// The dataset (or its binary cache) could not be located.
    #[error("dataset not found: {0}")]
    NotFound(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The source JSON failed to parse as a facility list.
    #[cfg(feature = "json")]
    #[error("invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The binary cache failed to decode.
    #[error("invalid binary cache: {0}")]
    Bincode(#[from] bincode::Error),

    /// A container format the current feature set cannot read
    /// (e.g. a `.json.gz` source without the `compact` feature).
    #[error("unsupported dataset container: {0}")]
    UnsupportedFormat(String),

    /// The reference point of a proximity search is outside valid
    /// geographic ranges; it is rejected before any ranking happens.
    #[error("reference point out of range: lat={lat}, lon={lon}")]
    InvalidReference { lat: f64, lon: f64 },
}

pub type Result<T> = std::result::Result<T, JakDbError>;
