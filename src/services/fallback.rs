//! Generic fallback cascade.
//!
//! Runs when the site-specific pass leaves the company or the position
//! empty. Structured metadata is preferred over class-pattern scans.

use crate::models::{FallbackRules, JobRecord};
use crate::services::PageDocument;
use crate::services::resolver::{resolve_field, resolve_meta};

/// Fill empty fields of `record` from the generic cascade.
///
/// Fields that already hold a value are left untouched.
pub fn apply_fallback(
    document: &dyn PageDocument,
    rules: &FallbackRules,
    mut record: JobRecord,
) -> JobRecord {
    if record.company_name.is_empty() {
        record.company_name = resolve_meta(document, &rules.company_meta);
    }
    if record.company_name.is_empty() {
        record.company_name = resolve_field(document, &rules.company);
    }

    if record.position.is_empty() {
        record.position = resolve_meta(document, &rules.position_meta);
    }
    if record.position.is_empty() && rules.position_uses_title {
        record.position = document.title().trim().to_string();
    }
    if record.position.is_empty() {
        record.position = resolve_field(document, &rules.position);
    }

    if record.location.is_empty() {
        record.location = resolve_field(document, &rules.location);
    }

    record
}
