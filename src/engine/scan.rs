//! Full-scan rebuild of the frame cache and index.

use std::collections::HashMap;

use crate::error::Result;
use crate::store::DocumentStore;
use crate::types::{FrameRecord, ScanReport};

use super::FrameIndexEngine;

impl<S: DocumentStore> FrameIndexEngine<S> {
    /// Full rebuild pass over every candidate document.
    ///
    /// Stamp-equality hits republish cached frames without re-running the
    /// pipeline; misses reprocess and store fresh entries. A document whose
    /// read fails is counted as skipped and keeps whatever the index last
    /// published under its short name, so one bad document neither blanks
    /// out good data nor aborts the rest of the scan. The index is swapped
    /// in wholesale at the end, after all per-document work is done.
    ///
    /// The only propagated failure is the inability to enumerate candidates
    /// at all.
    pub fn scan_all(&mut self) -> Result<ScanReport> {
        let candidates = self.store.list_candidate_documents()?;

        let mut report = ScanReport::default();
        let mut next_index: HashMap<String, Vec<FrameRecord>> = HashMap::new();
        let mut next_published: HashMap<String, String> = HashMap::new();

        for candidate in candidates {
            report.processed += 1;

            let cached = self
                .entries
                .get(&candidate.identity)
                .filter(|entry| entry.last_modified_stamp == candidate.mod_time_stamp);
            if let Some(entry) = cached {
                report.hits += 1;
                next_index.insert(candidate.short_name.clone(), entry.frames.clone());
                next_published.insert(candidate.identity.clone(), candidate.short_name.clone());
                continue;
            }

            match self.build_entry(&candidate.identity, candidate.mod_time_stamp) {
                Ok(entry) => {
                    report.misses += 1;
                    next_index.insert(candidate.short_name.clone(), entry.frames.clone());
                    next_published
                        .insert(candidate.identity.clone(), candidate.short_name.clone());
                    self.entries.insert(candidate.identity.clone(), entry);
                }
                Err(err) => {
                    report.skipped += 1;
                    tracing::warn!(
                        doc.identity = %candidate.identity,
                        error = %err,
                        "document skipped during scan"
                    );
                    // Fail-soft: keep the last-known-good list for this name.
                    if let Some(prior) = self.index.get(&candidate.short_name) {
                        next_index.insert(candidate.short_name.clone(), prior.clone());
                        next_published
                            .insert(candidate.identity.clone(), candidate.short_name.clone());
                    }
                }
            }
        }

        self.index = next_index;
        self.published = next_published;
        self.initialized = true;

        tracing::debug!(
            scan.processed = report.processed,
            scan.hits = report.hits,
            scan.misses = report.misses,
            scan.skipped = report.skipped,
            "full scan complete"
        );
        Ok(report)
    }
}
