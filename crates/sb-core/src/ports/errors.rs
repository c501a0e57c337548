use thiserror::Error;

/// Failures of the persistent key-value store.
#[derive(Debug, Error)]
pub enum FlagStoreError {
    #[error("store read failed: {0}")]
    ReadFailure(String),

    #[error("store write failed: {0}")]
    WriteFailure(String),
}

/// Failure of a platform permission round trip.
#[derive(Debug, Error)]
pub enum PermissionError {
    #[error("permission request failed: {0}")]
    RequestFailure(String),
}

#[derive(Debug, Error)]
pub enum AppDirsError {
    #[error("system data-local directory is unavailable")]
    DataLocalDirUnavailable,
}
