//! Error types for agrovision-core.

use thiserror::Error;

/// Result type for agrovision-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Reasons a view operation can fail.
///
/// Every submission in the crop, disease and chat views reports one of these
/// instead of failing silently, so callers can surface or assert on the cause.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A request from the same view is still outstanding.
    #[error("A request from this view is already in flight")]
    Busy,

    /// The chat input was empty after trimming.
    #[error("Message is empty")]
    EmptyInput,

    /// Disease detection was requested before an image was selected.
    #[error("No image selected")]
    MissingImage,

    /// The selected file is not one of the accepted image types.
    #[error("Unsupported image '{0}' (expected jpg, jpeg or png)")]
    UnsupportedImage(String),

    /// A categorical form value did not match any allowed option.
    #[error("Invalid {field}: '{value}' (expected one of: {allowed})")]
    InvalidOption {
        /// Human-readable field name.
        field: &'static str,
        /// The rejected input.
        value: String,
        /// Comma-separated list of accepted labels.
        allowed: String,
    },

    /// The request never produced a response (connection, DNS, TLS...).
    #[error("Network error: {0}")]
    Transport(String),

    /// The backend answered with a non-success status code.
    #[error("Request failed with status {0}")]
    Status(u16),

    /// The response body did not have the expected shape.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// The backend reported an error inside an otherwise successful response.
    #[error("Backend error: {0}")]
    Backend(String),

    /// Reading or writing the prediction cache failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// History removal addressed a position past the end of the list.
    #[error("History entry {index} out of range (have {len})")]
    HistoryIndex {
        /// Requested position.
        index: usize,
        /// Current number of entries.
        len: usize,
    },
}
