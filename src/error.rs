//! Error types for the frame index engine.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FramedexError>;

/// Errors produced by the decode/extract pipeline and the document store
/// boundary.
///
/// Per-document failures never escape [`FrameIndexEngine`] operations; they
/// are caught, logged, and degraded to "zero frames" or "stale-but-present"
/// data. The only error a caller of `scan_all` sees is a failure to
/// enumerate candidate documents at all.
///
/// [`FrameIndexEngine`]: crate::engine::FrameIndexEngine
#[derive(Debug, Error)]
pub enum FramedexError {
    /// No decoding strategy produced valid structured data.
    #[error("payload decode failed: {reason}")]
    Decode { reason: String },

    /// Structured data was present but its shape was unexpected.
    #[error("frame extraction failed: {reason}")]
    Extraction { reason: String },

    /// The document store could not supply the document's text or metadata.
    #[error("failed to read document {identity}: {reason}")]
    Read { identity: String, reason: String },

    /// A public operation received a malformed identity or name argument.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
