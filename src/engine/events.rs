//! Incremental cache updates driven by document lifecycle events.

use crate::store::{DocumentStore, short_name_of};

use super::FrameIndexEngine;

impl<S: DocumentStore> FrameIndexEngine<S> {
    /// Reprocess one document after a modification notification.
    ///
    /// Drops the existing cache entry, re-reads and reprocesses, and
    /// republishes the index entry. Errors on this path are caught and
    /// logged, and the index keeps its last-known-good list for the name:
    /// a transient read error mid-edit must not make suggestions vanish.
    /// This is the one deliberate place where the index may serve data the
    /// cache no longer backs.
    pub fn apply_modification(&mut self, identity: &str) {
        if identity.trim().is_empty() {
            tracing::warn!("apply_modification called with a blank identity");
            return;
        }
        self.entries.remove(identity);

        let rebuilt = self
            .store
            .document_stamp(identity)
            .and_then(|stamp| self.build_entry(identity, stamp));
        match rebuilt {
            Ok(entry) => {
                let short_name = short_name_of(identity).to_string();
                tracing::debug!(
                    doc.identity = %identity,
                    frames = entry.frames.len(),
                    "document reprocessed after modification"
                );
                self.publish(identity, &short_name, entry);
            }
            Err(err) => {
                tracing::warn!(
                    doc.identity = %identity,
                    error = %err,
                    "modification reprocess failed, index keeps last-known-good data"
                );
            }
        }
    }

    /// Remove the cache entry and the index entry for a deleted document.
    pub fn apply_deletion(&mut self, identity: &str) {
        if identity.trim().is_empty() {
            tracing::warn!("apply_deletion called with a blank identity");
            return;
        }
        self.entries.remove(identity);
        let short_name = self
            .published
            .remove(identity)
            .unwrap_or_else(|| short_name_of(identity).to_string());
        self.index.remove(&short_name);
        tracing::debug!(doc.identity = %identity, "document removed from index");
    }

    /// Atomically move a document from one identity to another.
    ///
    /// Both halves run inside this single call: the old identity's cache and
    /// index entries are dropped, then the new identity is processed fresh
    /// and published. A reader sequenced before this call sees the
    /// pre-rename state; one sequenced after sees the post-rename state.
    pub fn apply_rename(&mut self, old_identity: &str, new_identity: &str) {
        if old_identity.trim().is_empty() && new_identity.trim().is_empty() {
            tracing::warn!("apply_rename called with blank identities");
            return;
        }

        if !old_identity.trim().is_empty() {
            self.entries.remove(old_identity);
            if let Some(short_name) = self.published.remove(old_identity) {
                self.index.remove(&short_name);
            }
        }

        if new_identity.trim().is_empty() {
            return;
        }
        let rebuilt = self
            .store
            .document_stamp(new_identity)
            .and_then(|stamp| self.build_entry(new_identity, stamp));
        match rebuilt {
            Ok(entry) => {
                let short_name = short_name_of(new_identity).to_string();
                tracing::debug!(
                    doc.old_identity = %old_identity,
                    doc.identity = %new_identity,
                    frames = entry.frames.len(),
                    "document renamed and reprocessed"
                );
                self.publish(new_identity, &short_name, entry);
            }
            Err(err) => {
                tracing::warn!(
                    doc.identity = %new_identity,
                    error = %err,
                    "rename reprocess failed, new identity left unpublished"
                );
            }
        }
    }
}
