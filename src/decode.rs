//! Payload decoder: turns a fenced-block body into structured diagram data.
//!
//! Compressed payloads are DEFLATE streams carried over one of four textual
//! transports. The decoder strips all whitespace from the blob, then tries
//! the transports in fixed priority order; the first one whose decompressed
//! output is plausibly long and parses as JSON wins. Payloads that already
//! look like structured data take a direct parse path instead.

use std::io::Read;

use flate2::read::DeflateDecoder;
use serde_json::Value;

use crate::constants::MIN_DECODED_LEN;
use crate::error::{FramedexError, Result};

/// Maps a textual blob to the compressed byte stream it carries.
///
/// Transports are tried in declaration order; each failure falls through to
/// the next. Mirrors the strategy-registry shape used for document readers.
trait Transport {
    fn name(&self) -> &'static str;
    fn unpack(&self, blob: &str) -> Result<Vec<u8>>;
}

/// Standard base64 alphabet, the most common payload transport.
struct Base64Transport;

impl Transport for Base64Transport {
    fn name(&self) -> &'static str {
        "base64"
    }

    fn unpack(&self, blob: &str) -> Result<Vec<u8>> {
        use base64::Engine as _;
        base64::engine::general_purpose::STANDARD
            .decode(blob)
            .map_err(|err| FramedexError::Decode {
                reason: format!("base64 transport: {err}"),
            })
    }
}

/// UTF-16-safe transport: each code unit carries one byte, offset into the
/// Latin Extended range. No code unit in 0x100..=0x1FF is whitespace, so the
/// blob survives the whitespace normalization applied to payload bodies.
struct Utf16Transport;

const UTF16_OFFSET: u32 = 0x100;

impl Transport for Utf16Transport {
    fn name(&self) -> &'static str {
        "utf16"
    }

    fn unpack(&self, blob: &str) -> Result<Vec<u8>> {
        blob.chars()
            .map(|c| {
                let unit = u32::from(c);
                u8::try_from(unit.wrapping_sub(UTF16_OFFSET)).map_err(|_| {
                    FramedexError::Decode {
                        reason: format!("utf16 transport: code unit U+{unit:04X} out of range"),
                    }
                })
            })
            .collect()
    }
}

/// URI-component transport: percent-encoded bytes.
struct UriTransport;

impl Transport for UriTransport {
    fn name(&self) -> &'static str {
        "uri"
    }

    fn unpack(&self, blob: &str) -> Result<Vec<u8>> {
        percent_decode(blob)
    }
}

/// Generic raw-byte transport: the compressed stream as a plain hex dump.
struct HexTransport;

impl Transport for HexTransport {
    fn name(&self) -> &'static str {
        "hex"
    }

    fn unpack(&self, blob: &str) -> Result<Vec<u8>> {
        hex::decode(blob).map_err(|err| FramedexError::Decode {
            reason: format!("hex transport: {err}"),
        })
    }
}

static TRANSPORTS: [&(dyn Transport + Sync); 4] =
    [&Base64Transport, &Utf16Transport, &UriTransport, &HexTransport];

/// Decode a fenced-block body into parsed diagram data.
///
/// Pure over its input. Fails with [`FramedexError::Decode`] only when every
/// strategy, including the direct-parse sibling path, has been exhausted.
pub fn decode(raw: &str) -> Result<Value> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FramedexError::Decode {
            reason: "empty payload".into(),
        });
    }

    // Sibling path: the source may already be well-formed structured data
    // rather than a compressed blob.
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
            tracing::debug!(strategy = "direct", "payload decoded");
            return Ok(value);
        }
    }

    let stripped: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    for transport in TRANSPORTS {
        match try_transport(transport, &stripped) {
            Ok(value) => {
                tracing::debug!(strategy = transport.name(), "payload decoded");
                return Ok(value);
            }
            Err(err) => {
                tracing::debug!(strategy = transport.name(), error = %err, "decode strategy failed");
            }
        }
    }

    Err(FramedexError::Decode {
        reason: "no decoding strategy produced valid structured data".into(),
    })
}

fn try_transport(transport: &dyn Transport, blob: &str) -> Result<Value> {
    let bytes = transport.unpack(blob)?;
    let text = inflate(&bytes)?;
    let len = text.len();
    if len <= MIN_DECODED_LEN {
        return Err(FramedexError::Decode {
            reason: format!("decompressed output too short to be a diagram ({len} chars)"),
        });
    }
    serde_json::from_str::<Value>(&text).map_err(|err| FramedexError::Decode {
        reason: format!("decompressed output is not valid JSON: {err}"),
    })
}

/// Black-box decompression primitive shared by all transports.
fn inflate(bytes: &[u8]) -> Result<String> {
    let mut out = String::new();
    DeflateDecoder::new(bytes)
        .read_to_string(&mut out)
        .map_err(|err| FramedexError::Decode {
            reason: format!("deflate: {err}"),
        })?;
    Ok(out)
}

fn percent_decode(blob: &str) -> Result<Vec<u8>> {
    let bytes = blob.as_bytes();
    let mut out = Vec::with_capacity(bytes.len() / 3 + 1);
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = bytes.get(i + 1..i + 3).ok_or_else(|| FramedexError::Decode {
                reason: "uri transport: truncated percent escape".into(),
            })?;
            let hex = std::str::from_utf8(hex).map_err(|_| FramedexError::Decode {
                reason: "uri transport: non-ascii percent escape".into(),
            })?;
            let byte = u8::from_str_radix(hex, 16).map_err(|_| FramedexError::Decode {
                reason: format!("uri transport: bad percent escape %{hex}"),
            })?;
            out.push(byte);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    Ok(out)
}
