//! Change event router: translates host lifecycle notifications into cache
//! operations.
//!
//! The router filters events down to documents matching the tracked suffix
//! and delegates 1:1 to the engine. Renames need a little care at the suffix
//! boundary: a rename *into* the tracked suffix is an appearance, a rename
//! *out of* it is a disappearance.

use crate::constants::TRACKED_SUFFIX;
use crate::engine::FrameIndexEngine;
use crate::store::DocumentStore;
use crate::types::LifecycleEvent;

/// Routes [`LifecycleEvent`]s to the engine, filtered by tracked suffix.
#[derive(Debug, Clone)]
pub struct EventRouter {
    suffix: String,
}

impl Default for EventRouter {
    fn default() -> Self {
        Self {
            suffix: TRACKED_SUFFIX.to_string(),
        }
    }
}

impl EventRouter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the tracked suffix (defaults to [`TRACKED_SUFFIX`]).
    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    fn tracks(&self, identity: &str) -> bool {
        identity.ends_with(&self.suffix)
    }

    /// Dispatch one event. Synchronous; the cost is bounded by the
    /// decode+extract pipeline of a single document.
    pub fn route<S: DocumentStore>(
        &self,
        engine: &mut FrameIndexEngine<S>,
        event: &LifecycleEvent,
    ) {
        match event {
            LifecycleEvent::Modified { identity } => {
                if self.tracks(identity) {
                    engine.apply_modification(identity);
                } else {
                    tracing::trace!(doc.identity = %identity, "modify event ignored, untracked suffix");
                }
            }
            LifecycleEvent::Deleted { identity } => {
                if self.tracks(identity) {
                    engine.apply_deletion(identity);
                } else {
                    tracing::trace!(doc.identity = %identity, "delete event ignored, untracked suffix");
                }
            }
            LifecycleEvent::Renamed {
                identity,
                old_identity,
            } => {
                let new_tracked = self.tracks(identity);
                let old_tracked = self.tracks(old_identity);
                match (old_tracked, new_tracked) {
                    (true, true) => engine.apply_rename(old_identity, identity),
                    // Renamed out of the tracked suffix: plain disappearance.
                    (true, false) => engine.apply_deletion(old_identity),
                    // Renamed into the tracked suffix: plain appearance.
                    (false, true) => engine.apply_modification(identity),
                    (false, false) => {
                        tracing::trace!(doc.identity = %identity, "rename event ignored, untracked suffix");
                    }
                }
            }
        }
    }
}
