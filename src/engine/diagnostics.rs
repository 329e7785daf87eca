//! Read-only statistics and forced-rescan entry points.

use std::mem;

use crate::error::Result;
use crate::store::DocumentStore;
use crate::types::{CacheEntry, CacheStats, EngineDiagnostics, FrameRecord, ScanReport};

use super::FrameIndexEngine;

impl<S: DocumentStore> FrameIndexEngine<S> {
    /// Cache-level counters plus a rough heap footprint estimate.
    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        let total_frame_count = self.entries.values().map(|e| e.frames.len()).sum();
        let entry_bytes: usize = self
            .entries
            .iter()
            .map(|(identity, entry)| {
                identity.len()
                    + entry.fingerprint.len()
                    + mem::size_of::<CacheEntry>()
                    + frames_bytes(&entry.frames)
            })
            .sum();
        let index_bytes: usize = self
            .index
            .iter()
            .map(|(name, frames)| name.len() + frames_bytes(frames))
            .sum();
        CacheStats {
            entry_count: self.entries.len(),
            total_frame_count,
            approx_memory_bytes: entry_bytes + index_bytes,
        }
    }

    /// Snapshot of engine state for operator-facing controls.
    #[must_use]
    pub fn diagnostics(&self) -> EngineDiagnostics {
        let mut file_list: Vec<String> = self.index.keys().cloned().collect();
        file_list.sort();
        EngineDiagnostics {
            initialized: self.initialized,
            total_files: self.index.len(),
            total_frames: self.index.values().map(Vec::len).sum(),
            cache_size: self.entries.len(),
            file_list,
        }
    }

    /// Drop everything and rebuild from scratch.
    pub fn force_rescan(&mut self) -> Result<ScanReport> {
        tracing::debug!("forced rescan requested");
        self.clear();
        self.scan_all()
    }
}

fn frames_bytes(frames: &[FrameRecord]) -> usize {
    frames
        .iter()
        .map(|f| f.name.len() + f.id.len() + mem::size_of::<FrameRecord>())
        .sum()
}
