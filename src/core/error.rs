use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The geographic dataset could not be turned into a catalog.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Failed to read dataset {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to download dataset from {url}: {source}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Malformed GeoJSON: {0}")]
    Malformed(#[from] geojson::Error),
    #[error("Dataset is not a FeatureCollection")]
    NotFeatureCollection,
    #[error("Dataset contains no features")]
    Empty,
    #[error("Feature #{index} has no string \"name\" property")]
    MissingName { index: usize },
}

/// The persisted status file could not be read or written.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read status file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Corrupt status file {path:?}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to write status file {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A user action was rejected or could not be completed.
#[derive(Error, Debug)]
pub enum ActionError {
    #[error("No country selected; pick one first")]
    NoSelection,
    #[error(transparent)]
    Store(#[from] StoreError),
}
