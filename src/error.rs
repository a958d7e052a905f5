// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no target date labels configured")]
    NoDates,
    #[error("TARGET_ROWS is set but lists no row labels")]
    NoRows,
    #[error("invalid TIMEOUT_MS value {value:?} (expected milliseconds > 0)")]
    Timeout { value: String },
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("cannot build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("GET {url} timed out")]
    Timeout { url: String },
    #[error("GET {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("GET {url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("cannot read calendar from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("cannot build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("notification POST failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("notification endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
}

/// Run-level failure. Every variant ends the process with a non-zero exit.
#[derive(Debug, Error)]
pub enum WatchError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}
