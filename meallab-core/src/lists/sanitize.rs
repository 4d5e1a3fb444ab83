//! Normalization applied to ids and to anything read back from disk.

use indexmap::IndexMap;

/// Trims an identifier. Pasted ids often carry stray whitespace.
pub fn normalize_id(input: &str) -> &str {
    input.trim()
}

/// Cleans a raw record before it enters memory.
///
/// Keys and values are trimmed and entries whose id ends up blank are dropped.
/// When two raw keys collapse onto the same id, the first position is kept and
/// the later name wins.
pub fn sanitize(raw: IndexMap<String, String>) -> IndexMap<String, String> {
    let mut clean = IndexMap::with_capacity(raw.len());
    for (id, name) in raw {
        let id = normalize_id(&id);
        if id.is_empty() {
            continue;
        }
        clean.insert(id.to_string(), name.trim().to_string());
    }
    clean
}
