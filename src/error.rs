use thiserror::Error;

/// A required field was absent on an otherwise delivered record.
/// The platform contract guarantees these fields, so their absence
/// indicates an upstream violation worth surfacing. One malformed
/// record never aborts the stream it was delivered on.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("required field \"{field}\" is missing")]
pub struct MalformedMeasurement {
    /// Column name of the missing field
    pub field: &'static str,
}

/// Errors that may rise when bridging the platform measurement stream
#[derive(Error, Debug)]
pub enum Error {
    /// Host platform does not expose raw GNSS measurements:
    /// surfaced to the caller, no partial registration is attempted.
    #[error("unsupported platform api level {found}, requires at least {minimum}")]
    UnsupportedPlatform { found: u32, minimum: u32 },
    /// Location authorization was not granted. Never retried
    /// automatically: acquisition is the host application's concern.
    #[error("location authorization denied")]
    AuthorizationDenied,
    /// Upstream platform contract violation on one record
    #[error(transparent)]
    MalformedMeasurement(#[from] MalformedMeasurement),
}

/// Errors that may rise in the Formatting process
#[derive(Error, Debug)]
pub enum FormattingError {
    #[error("output error")]
    OutputError(#[from] std::io::Error),
}
