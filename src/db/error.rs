//! Failures reading or writing the statistics blob.

use derive_more::{Display, Error};
use tracing::instrument;

/// A key-value store operation failed.
///
/// Carries the source location that raised it, so a `warn!` about a lost
/// write points at the call that lost it.
#[derive(Debug, Clone, Display, Error)]
#[display("Store error: {} at {}:{}", message, file, line)]
pub struct StoreError {
    /// What went wrong.
    pub message: String,
    /// Line of the failing call.
    pub line: u32,
    /// File of the failing call.
    pub file: &'static str,
}

impl StoreError {
    /// Records `message` against the caller's location.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let caller = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: caller.line(),
            file: caller.file(),
        }
    }
}

impl From<diesel::result::Error> for StoreError {
    #[track_caller]
    fn from(err: diesel::result::Error) -> Self {
        Self::new(format!("kv_entries query failed: {}", err))
    }
}

impl From<diesel::ConnectionError> for StoreError {
    #[track_caller]
    fn from(err: diesel::ConnectionError) -> Self {
        Self::new(format!("could not open statistics database: {}", err))
    }
}

impl From<serde_json::Error> for StoreError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("statistics blob is not valid JSON: {}", err))
    }
}
