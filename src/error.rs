use std::path::PathBuf;

use thiserror::Error;

/// Why a lookup against the geolocation service produced no record.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to retrieve IP information: {0}")]
    Request(#[source] reqwest::Error),
    #[error("Failed to read response body: {0}")]
    Body(#[source] reqwest::Error),
    #[error("Failed to parse JSON response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors from reading or writing the JSON store file.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read IP list from {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file exists but is not a valid IP list. Callers may treat this
    /// as an empty list.
    #[error("Failed to unmarshal IP list from {}: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to marshal IP information: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("Failed to write IP information to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum TrackError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type Result<T, E = TrackError> = std::result::Result<T, E>;
