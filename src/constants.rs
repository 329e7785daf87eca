//! Crate-wide constants for the frame index engine.

/// Two-part extension identifying diagram-bearing documents.
pub const TRACKED_SUFFIX: &str = ".diagram.md";

/// Fence info string marking a compressed diagram payload.
pub const COMPRESSED_BLOCK_TAG: &str = "compressed-json";

/// Fence info string marking an uncompressed JSON diagram payload.
pub const PLAIN_BLOCK_TAG: &str = "json";

/// Element kind tag that qualifies an element as a frame.
pub const FRAME_KIND: &str = "frame";

/// Minimum plausible length of a decompressed payload. Shorter results are
/// treated as a failed decode attempt rather than a valid diagram.
pub const MIN_DECODED_LEN: usize = 50;

/// Prefix used when synthesizing a positional frame id for elements that
/// carry no id of their own.
pub const SYNTHETIC_ID_PREFIX: &str = "frame-";
