//! Field resolution over ordered selector candidates.

use crate::services::PageDocument;

/// Resolve one field from an ordered list of selector candidates.
///
/// Each candidate is queried for its first matching element; the first
/// candidate whose match has non-empty trimmed text wins. Returns an empty
/// string when no candidate yields text.
pub fn resolve_field<S: AsRef<str>>(document: &dyn PageDocument, candidates: &[S]) -> String {
    candidates
        .iter()
        .find_map(|selector| {
            document
                .query_first(selector.as_ref())
                .map(|text| text.trim().to_string())
                .filter(|text| !text.is_empty())
        })
        .unwrap_or_default()
}

/// Resolve a value from meta tags, in order.
pub fn resolve_meta<S: AsRef<str>>(document: &dyn PageDocument, names: &[S]) -> String {
    names
        .iter()
        .find_map(|name| {
            document
                .query_meta(name.as_ref())
                .map(|content| content.trim().to_string())
                .filter(|content| !content.is_empty())
        })
        .unwrap_or_default()
}
