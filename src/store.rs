//! Document store boundary: how the engine discovers and reads documents.
//!
//! The engine never touches the filesystem directly; it goes through a
//! [`DocumentStore`], so hosts can back it with whatever document source they
//! own. Two implementations ship with the crate: a filesystem walker and an
//! in-memory store for tests and embedded hosts.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::UNIX_EPOCH;

use walkdir::WalkDir;

use crate::constants::TRACKED_SUFFIX;
use crate::error::{FramedexError, Result};
use crate::types::CandidateDocument;

/// Source of candidate documents and their content.
pub trait DocumentStore {
    /// Enumerate every document matching the tracked suffix.
    ///
    /// This is the one call whose failure propagates out of a full scan.
    fn list_candidate_documents(&self) -> Result<Vec<CandidateDocument>>;

    /// Read the full text of one document.
    fn read_document(&self, identity: &str) -> Result<String>;

    /// Current modification time of one document, in milliseconds since the
    /// epoch. Used to stamp cache entries built outside a full scan.
    fn document_stamp(&self, identity: &str) -> Result<u64>;
}

/// Derive the Index lookup key from a path-like identity: the base name
/// without any leading path components.
#[must_use]
pub fn short_name_of(identity: &str) -> &str {
    identity
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(identity)
}

/// Filesystem-backed store walking a root directory for tracked documents.
#[derive(Debug, Clone)]
pub struct FsDocumentStore {
    root: PathBuf,
    suffix: String,
}

impl FsDocumentStore {
    #[must_use]
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            suffix: TRACKED_SUFFIX.to_string(),
        }
    }

    /// Override the tracked suffix (defaults to [`TRACKED_SUFFIX`]).
    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    fn stamp_of(path: &Path) -> u64 {
        let modified = match path.metadata().and_then(|meta| meta.modified()) {
            Ok(modified) => modified,
            Err(_) => return 0,
        };
        modified
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }
}

impl DocumentStore for FsDocumentStore {
    fn list_candidate_documents(&self) -> Result<Vec<CandidateDocument>> {
        if !self.root.is_dir() {
            return Err(FramedexError::Read {
                identity: self.root.display().to_string(),
                reason: "document root is not a directory".into(),
            });
        }
        let mut candidates = Vec::new();
        for entry in WalkDir::new(&self.root).follow_links(false) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!(error = %err, "skipping unreadable directory entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let identity = entry.path().display().to_string();
            if !identity.ends_with(&self.suffix) {
                continue;
            }
            let short_name = short_name_of(&identity).to_string();
            let mod_time_stamp = Self::stamp_of(entry.path());
            candidates.push(CandidateDocument {
                identity,
                short_name,
                mod_time_stamp,
            });
        }
        candidates.sort_by(|a, b| a.identity.cmp(&b.identity));
        Ok(candidates)
    }

    fn read_document(&self, identity: &str) -> Result<String> {
        std::fs::read_to_string(identity).map_err(|err| FramedexError::Read {
            identity: identity.to_string(),
            reason: err.to_string(),
        })
    }

    fn document_stamp(&self, identity: &str) -> Result<u64> {
        let path = Path::new(identity);
        if !path.is_file() {
            return Err(FramedexError::Read {
                identity: identity.to_string(),
                reason: "no such document".into(),
            });
        }
        Ok(Self::stamp_of(path))
    }
}

#[derive(Debug, Clone)]
struct MemoryDocument {
    text: String,
    stamp: u64,
    read_fails: bool,
}

/// In-memory store for tests and embedded hosts.
///
/// Cloning yields a second handle to the same underlying documents, so a test
/// can keep mutating the store after handing a clone to the engine. Matches
/// the crate's single-threaded ownership model.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocumentStore {
    docs: Rc<RefCell<BTreeMap<String, MemoryDocument>>>,
    fail_listing: Rc<RefCell<bool>>,
}

impl MemoryDocumentStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, identity: &str, text: &str, stamp: u64) {
        self.docs.borrow_mut().insert(
            identity.to_string(),
            MemoryDocument {
                text: text.to_string(),
                stamp,
                read_fails: false,
            },
        );
    }

    pub fn remove(&self, identity: &str) {
        self.docs.borrow_mut().remove(identity);
    }

    /// Bump a document's modification stamp without changing its text.
    pub fn touch(&self, identity: &str, stamp: u64) {
        if let Some(doc) = self.docs.borrow_mut().get_mut(identity) {
            doc.stamp = stamp;
        }
    }

    /// Make subsequent reads of one document fail, simulating a transient
    /// read error mid-edit.
    pub fn set_read_failure(&self, identity: &str, fails: bool) {
        if let Some(doc) = self.docs.borrow_mut().get_mut(identity) {
            doc.read_fails = fails;
        }
    }

    /// Make candidate enumeration fail entirely.
    pub fn set_listing_failure(&self, fails: bool) {
        *self.fail_listing.borrow_mut() = fails;
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn list_candidate_documents(&self) -> Result<Vec<CandidateDocument>> {
        if *self.fail_listing.borrow() {
            return Err(FramedexError::Read {
                identity: "<listing>".into(),
                reason: "candidate enumeration unavailable".into(),
            });
        }
        Ok(self
            .docs
            .borrow()
            .iter()
            .filter(|(identity, _)| identity.ends_with(TRACKED_SUFFIX))
            .map(|(identity, doc)| CandidateDocument {
                identity: identity.clone(),
                short_name: short_name_of(identity).to_string(),
                mod_time_stamp: doc.stamp,
            })
            .collect())
    }

    fn read_document(&self, identity: &str) -> Result<String> {
        let docs = self.docs.borrow();
        let doc = docs.get(identity).ok_or_else(|| FramedexError::Read {
            identity: identity.to_string(),
            reason: "no such document".into(),
        })?;
        if doc.read_fails {
            return Err(FramedexError::Read {
                identity: identity.to_string(),
                reason: "simulated read failure".into(),
            });
        }
        Ok(doc.text.clone())
    }

    fn document_stamp(&self, identity: &str) -> Result<u64> {
        self.docs
            .borrow()
            .get(identity)
            .map(|doc| doc.stamp)
            .ok_or_else(|| FramedexError::Read {
                identity: identity.to_string(),
                reason: "no such document".into(),
            })
    }
}
