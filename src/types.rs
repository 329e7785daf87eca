//! Public types exposed by the `framedex-core` crate.

use serde::{Deserialize, Serialize};

/// One named frame discovered inside a diagram document.
///
/// Frame names are user-assigned and not unique; a document may legitimately
/// contain several frames with the same name, and all of them are indexed as
/// distinct records. Records are created fresh on every extraction pass and
/// never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameRecord {
    /// User-assigned frame name (non-empty after trimming).
    pub name: String,
    /// Stable identifier from the source element, or a synthetic positional
    /// id when the element carries none.
    pub id: String,
    /// Ordinal position of the element in the source collection. Establishes
    /// the creation ordering consumers use for "most recent first" display.
    pub index: usize,
}

/// Cached extraction result for one document identity.
///
/// Owned exclusively by the engine; replaced wholesale on reprocessing and
/// removed on deletion or rename-away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// Content hash, stored as a secondary change-detection signal and for
    /// diagnostics. The authoritative staleness test is `last_modified_stamp`.
    pub fingerprint: String,
    pub frames: Vec<FrameRecord>,
    /// Document modification time at the moment this entry was built.
    pub last_modified_stamp: u64,
}

/// A document the store considers a candidate for frame indexing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateDocument {
    /// Stable path-like identity, unique key into the cache.
    pub identity: String,
    /// Base name without path, the Index lookup key.
    pub short_name: String,
    /// Current modification time in milliseconds since the epoch.
    pub mod_time_stamp: u64,
}

/// Counters returned by a full scan, for observability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub processed: usize,
    pub hits: usize,
    pub misses: usize,
    pub skipped: usize,
}

/// Cache-level statistics for operator-facing controls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub entry_count: usize,
    pub total_frame_count: usize,
    /// Rough heap footprint of the cache and index, in bytes.
    pub approx_memory_bytes: usize,
}

/// Snapshot of engine state for operator-facing diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EngineDiagnostics {
    /// Whether a full scan has completed since construction or `clear()`.
    pub initialized: bool,
    /// Number of documents currently published in the Index.
    pub total_files: usize,
    /// Total frames across all published Index entries.
    pub total_frames: usize,
    /// Number of cache entries (may exceed `total_files` when documents have
    /// vanished since the last scan).
    pub cache_size: usize,
    /// Sorted short names of all published documents.
    pub file_list: Vec<String>,
}

/// External document lifecycle notification consumed by the event router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleEvent {
    Modified { identity: String },
    Deleted { identity: String },
    Renamed { identity: String, old_identity: String },
}
