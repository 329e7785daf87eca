//! Content-change detection via a cheap content hash.
//!
//! The hash is a secondary, defensive signal: the engine's primary cache
//! validity test is modification-stamp equality. Collisions are acceptable;
//! the fingerprint is stored mainly for diagnostics and future stronger
//! invalidation.

/// Hash the full document content into a short hex fingerprint.
#[must_use]
pub fn fingerprint(content: &str) -> String {
    blake3::hash(content.as_bytes()).to_hex().to_string()
}

/// Whether `content` differs from the content that produced `prior`.
///
/// `None` for `prior` means the document has never been fingerprinted, which
/// always counts as changed.
#[must_use]
pub fn has_changed(content: &str, prior: Option<&str>) -> bool {
    match prior {
        Some(prior) => fingerprint(content) != prior,
        None => true,
    }
}
