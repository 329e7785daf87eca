//! Frame extraction from parsed diagram data.
//!
//! Shape validation happens once, at this boundary, via a typed serde decode
//! per element. Individually malformed elements are skipped; only a wrong
//! top-level shape is an error, and even that is recovered to zero frames by
//! the engine.

use serde::Deserialize;
use serde_json::Value;

use crate::constants::{FRAME_KIND, SYNTHETIC_ID_PREFIX};
use crate::error::{FramedexError, Result};
use crate::types::FrameRecord;

#[derive(Debug, Deserialize)]
struct DiagramElement {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

/// Extract all named frames from a parsed diagram document, in source order.
///
/// A document without an element collection is a valid diagram with zero
/// frames. Duplicate frame names are preserved as distinct records.
pub fn extract(doc: &Value) -> Result<Vec<FrameRecord>> {
    let Some(root) = doc.as_object() else {
        return Err(FramedexError::Extraction {
            reason: "document root is not an object".into(),
        });
    };
    let Some(elements) = root.get("elements") else {
        return Ok(Vec::new());
    };
    let Some(items) = elements.as_array() else {
        return Err(FramedexError::Extraction {
            reason: "element collection is not an array".into(),
        });
    };

    let mut frames = Vec::new();
    for (index, item) in items.iter().enumerate() {
        let Ok(element) = serde_json::from_value::<DiagramElement>(item.clone()) else {
            tracing::debug!(element.index = index, "skipping malformed element");
            continue;
        };
        if element.kind != FRAME_KIND {
            continue;
        }
        let Some(name) = element.name.as_deref() else {
            continue;
        };
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        let id = element
            .id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| format!("{SYNTHETIC_ID_PREFIX}{index}"));
        frames.push(FrameRecord {
            name: name.to_string(),
            id,
            index,
        });
    }
    Ok(frames)
}
