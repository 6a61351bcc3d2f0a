//! Profile error types.

use thiserror::Error;

/// Result type for profile operations.
pub type ProfileResult<T> = Result<T, ProfileError>;

/// Errors that can occur while decoding, diffing or encoding profiles.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// A profile document was absent (empty file or a JSON `null`).
    #[error("{0} profile is missing")]
    MissingInput(&'static str),

    /// Start and target look tables have different element counts.
    #[error("look table length mismatch: start has {start} entries, target has {target}")]
    LookupTableLengthMismatch {
        /// Entries in the start profile.
        start: usize,
        /// Entries in the target profile.
        target: usize,
    },

    /// Tone curves differ in length once exclusions are removed.
    #[error("tone curve length mismatch: start has {start} samples, target has {target} (after filtering)")]
    ToneCurveLengthMismatch {
        /// Remaining samples in the start profile.
        start: usize,
        /// Remaining samples in the target profile.
        target: usize,
    },

    /// Malformed tone curve exclusion literal.
    #[error("invalid tone curve value {0:?}: expected \"H,V\"")]
    InvalidExclusion(String),

    /// JSON profile could not be decoded or encoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// dcpData document could not be decoded.
    #[error("XML decode error: {0}")]
    XmlDecode(#[from] quick_xml::DeError),

    /// dcpData document could not be encoded.
    #[error("XML encode error: {0}")]
    XmlEncode(#[from] quick_xml::SeError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
