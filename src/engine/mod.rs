//! Core `FrameIndexEngine` owning the frame cache and its derived index.
//!
//! All shared mutable state lives here: the per-identity cache entries, the
//! short-name index the completion UI reads, and the identity-to-short-name
//! association needed to retire index entries. Every mutating operation takes
//! `&mut self`, so a mutation always runs to completion before any other
//! cache operation can start; readers observe either the state before or
//! after a mutation, never a mixture.

mod diagnostics;
mod events;
mod scan;

use std::collections::HashMap;

use crate::block::find_payload_block;
use crate::decode::decode;
use crate::error::Result;
use crate::extract::extract;
use crate::fingerprint::fingerprint;
use crate::store::DocumentStore;
use crate::types::{CacheEntry, FrameRecord};

/// The frame cache and index. Owns its maps exclusively; collaborators only
/// call its public operations.
pub struct FrameIndexEngine<S: DocumentStore> {
    pub(crate) store: S,
    /// Cache entries keyed by document identity.
    pub(crate) entries: HashMap<String, CacheEntry>,
    /// Derived view keyed by short name, read by the completion UI.
    pub(crate) index: HashMap<String, Vec<FrameRecord>>,
    /// Short name each identity last published under.
    pub(crate) published: HashMap<String, String>,
    pub(crate) initialized: bool,
}

impl<S: DocumentStore> FrameIndexEngine<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            entries: HashMap::new(),
            index: HashMap::new(),
            published: HashMap::new(),
            initialized: false,
        }
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Look up the cached frame list for a document short name.
    ///
    /// Never fails: unknown names and blank arguments both yield an empty
    /// slice (blank arguments are logged as host-supplied garbage).
    #[must_use]
    pub fn frames_for_document(&self, short_name: &str) -> &[FrameRecord] {
        if short_name.trim().is_empty() {
            tracing::warn!("frames_for_document called with a blank short name");
            return &[];
        }
        self.index.get(short_name).map_or(&[], Vec::as_slice)
    }

    /// Force the next access for `identity` to reprocess by dropping its
    /// cache entry. Does not reprocess and does not touch the index.
    pub fn invalidate(&mut self, identity: &str) {
        if identity.trim().is_empty() {
            tracing::warn!("invalidate called with a blank identity");
            return;
        }
        if self.entries.remove(identity).is_some() {
            tracing::debug!(doc.identity = %identity, "cache entry invalidated");
        }
    }

    /// Drop all cache entries and all index entries.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
        self.published.clear();
        self.initialized = false;
        tracing::debug!("frame cache cleared");
    }

    /// Build a fresh cache entry for one document: read, scan for the payload
    /// block, decode, extract.
    ///
    /// Read failures propagate so callers can retain prior state; decode and
    /// extraction failures degrade to an entry with zero frames, since a
    /// malformed diagram is still a tracked document.
    pub(crate) fn build_entry(&self, identity: &str, stamp: u64) -> Result<CacheEntry> {
        let text = self.store.read_document(identity)?;
        let frames = frames_from_text(identity, &text);
        Ok(CacheEntry {
            fingerprint: fingerprint(&text),
            frames,
            last_modified_stamp: stamp,
        })
    }

    /// Publish an entry's frames into the index under `short_name`, replacing
    /// the previous list wholesale.
    pub(crate) fn publish(&mut self, identity: &str, short_name: &str, entry: CacheEntry) {
        self.index
            .insert(short_name.to_string(), entry.frames.clone());
        self.published
            .insert(identity.to_string(), short_name.to_string());
        self.entries.insert(identity.to_string(), entry);
    }
}

/// Run the decode/extract pipeline over raw document text. Never fails:
/// every per-document pipeline error is logged and recovered to zero frames.
fn frames_from_text(identity: &str, text: &str) -> Vec<FrameRecord> {
    let Some(block) = find_payload_block(text) else {
        tracing::debug!(doc.identity = %identity, "no payload block, zero frames");
        return Vec::new();
    };
    let value = match decode(block.body) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(doc.identity = %identity, error = %err, "payload decode failed");
            return Vec::new();
        }
    };
    match extract(&value) {
        Ok(frames) => frames,
        Err(err) => {
            tracing::warn!(doc.identity = %identity, error = %err, "frame extraction failed");
            Vec::new()
        }
    }
}
