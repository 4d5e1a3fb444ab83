//! JSON encoding for list records.

use indexmap::IndexMap;
use serde_json::Value;

/// Decodes a record into an ordered id -> name map.
///
/// An empty document or a bare `null` is an empty record. Anything that is
/// not a JSON object fails. Scalar values are taken as names (`null` as an
/// empty name); nested arrays and objects are skipped.
pub fn decode(text: &str) -> Result<IndexMap<String, String>, serde_json::Error> {
    if text.trim().is_empty() {
        return Ok(IndexMap::new());
    }

    let raw: Option<IndexMap<String, Value>> = serde_json::from_str(text)?;
    let Some(raw) = raw else {
        return Ok(IndexMap::new());
    };

    let mut entries = IndexMap::with_capacity(raw.len());
    for (id, value) in raw {
        let name = match value {
            Value::String(s) => s,
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::Array(_) | Value::Object(_) => {
                tracing::debug!(id = %id, "skipping record entry with a non-text name");
                continue;
            }
        };
        entries.insert(id, name);
    }
    Ok(entries)
}

/// Encodes a record as pretty-printed JSON, keeping insertion order.
pub fn encode(entries: &IndexMap<String, String>) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(entries)
}
