//! Fenced-block scanner for the document body grammar.
//!
//! A diagram-bearing document carries at most one fenced block whose info
//! string is the compressed marker, the plain-JSON marker, or empty. Other
//! fenced blocks (notes, code samples) may appear and are ignored. Absence
//! of a payload block is not an error; it simply means zero frames.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{COMPRESSED_BLOCK_TAG, PLAIN_BLOCK_TAG};

#[allow(clippy::expect_used)]
static FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?ms)^```([A-Za-z0-9_-]*)[ \t]*\r?\n(.*?)^```").expect("fence pattern")
});

/// How the payload block declared itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Tagged with the compressed marker; body goes through decompression.
    Compressed,
    /// Tagged with the plain-JSON marker.
    Plain,
    /// Untagged fence.
    Untagged,
}

/// The payload block found in a document body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadBlock<'a> {
    pub kind: BlockKind,
    pub body: &'a str,
}

/// Locate the first payload-bearing fenced block in `text`.
///
/// Returns `None` when no fenced block carries a recognized info string,
/// including the case of an unclosed fence.
#[must_use]
pub fn find_payload_block(text: &str) -> Option<PayloadBlock<'_>> {
    for caps in FENCE.captures_iter(text) {
        let tag = caps.get(1).map_or("", |m| m.as_str());
        let kind = if tag == COMPRESSED_BLOCK_TAG {
            BlockKind::Compressed
        } else if tag == PLAIN_BLOCK_TAG {
            BlockKind::Plain
        } else if tag.is_empty() {
            BlockKind::Untagged
        } else {
            continue;
        };
        let body = caps.get(2).map_or("", |m| m.as_str());
        return Some(PayloadBlock {
            kind,
            body: body.trim_end_matches(['\r', '\n']),
        });
    }
    None
}
