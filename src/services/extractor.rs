//! Extraction orchestrator.
//!
//! Composes classification, site-specific resolution, the fallback cascade
//! and post-processing into a single `extract(url, document)` call.

use crate::models::{CompanyRule, ExtractorConfig, FallbackRules, JobRecord, SiteId, SiteRule};
use crate::services::classifier::SiteClassifier;
use crate::services::fallback::apply_fallback;
use crate::services::postprocess::post_process;
use crate::services::resolver::resolve_field;
use crate::services::{HtmlDocument, PageDocument};

/// Site-adaptive job record extractor.
///
/// Holds only immutable rules; every call recomputes from the document.
pub struct Extractor {
    classifier: SiteClassifier,
    rules: Vec<SiteRule>,
    fallback: FallbackRules,
}

impl Extractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self {
            classifier: SiteClassifier::from_rules(&config.sites),
            rules: config.sites,
            fallback: config.fallback,
        }
    }

    /// Extract a record from a loaded page. Never fails.
    pub fn extract(&self, url: &str, document: &dyn PageDocument) -> JobRecord {
        let classification = self.classifier.classify(url);
        let mut record = JobRecord::new(classification.source, url);

        if let Some(rule) = self.rule_for(classification.site) {
            record = Self::resolve_primary(document, rule, record);
        }

        if record.needs_fallback() {
            log::debug!(
                "Applying fallback cascade for {} (company: {}, position: {})",
                url,
                !record.company_name.is_empty(),
                !record.position.is_empty()
            );
            record = apply_fallback(document, &self.fallback, record);
        }

        post_process(record)
    }

    /// Parse raw HTML and extract a record from it.
    pub fn extract_html(&self, url: &str, html: &str) -> JobRecord {
        let document = HtmlDocument::parse(html);
        self.extract(url, &document)
    }

    /// The site registry this extractor was built with.
    pub fn rules(&self) -> &[SiteRule] {
        &self.rules
    }

    fn rule_for(&self, site: SiteId) -> Option<&SiteRule> {
        if site == SiteId::Unknown {
            return None;
        }
        self.rules.iter().find(|rule| rule.site == site)
    }

    fn resolve_primary(
        document: &dyn PageDocument,
        rule: &SiteRule,
        mut record: JobRecord,
    ) -> JobRecord {
        record.company_name = match &rule.company {
            CompanyRule::Constant(name) => name.clone(),
            CompanyRule::Selectors(candidates) => resolve_field(document, candidates),
        };
        record.position = resolve_field(document, &rule.position);
        record.location = resolve_field(document, &rule.location);
        record
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Department;

    #[test]
    fn test_primary_pass_skips_fallback_when_complete() {
        let html = r#"
            <head><meta property="og:site_name" content="Wrong"></head>
            <div class="main-header-text"><a href="/">Acme</a></div>
            <div class="posting-headline"><h2>Sales Associate</h2></div>
            <div class="posting-categories"><div class="location">Austin, TX</div></div>
        "#;
        let record = Extractor::default().extract_html("https://jobs.lever.co/acme/42", html);
        assert_eq!(record.source, "Lever");
        assert_eq!(record.company_name, "Acme");
        assert_eq!(record.position, "Sales Associate");
        assert_eq!(record.location, "Austin, TX");
        assert_eq!(record.department, Some(Department::Sales));
    }

    #[test]
    fn test_constant_company_ignores_page() {
        let html = r#"<div class="company">Not Google</div><h1>Legal Counsel</h1>"#;
        let record =
            Extractor::default().extract_html("https://careers.google.com/jobs/results/9", html);
        assert_eq!(record.company_name, "Google");
        assert_eq!(record.position, "Legal Counsel");
        assert_eq!(record.department, Some(Department::Legal));
    }

    #[test]
    fn test_job_site_signal_only_routes_to_fallback() {
        let html = r#"<head><title>Finance Analyst</title><meta property="og:site_name" content="Spotify"></head>"#;
        let record = Extractor::default().extract_html("https://jobs.spotify.com/job/1", html);
        assert_eq!(record.source, "jobs.spotify.com");
        assert_eq!(record.company_name, "Spotify");
        assert_eq!(record.position, "Finance Analyst");
    }

    #[test]
    fn test_location_not_filled_when_fallback_skipped() {
        let html = r#"
            <div class="company-name">Acme</div>
            <h1 class="app-title">Designer</h1>
            <div class="office-address">Paris</div>
        "#;
        let record =
            Extractor::default().extract_html("https://boards.greenhouse.io/acme/jobs/1", html);
        assert_eq!(record.company_name, "Acme");
        assert_eq!(record.position, "Designer");
        assert_eq!(record.location, "");
    }

    #[test]
    fn test_empty_page_yields_empty_fields() {
        let record = Extractor::default().extract_html("https://example.org/x", "");
        assert_eq!(record.source, "example.org");
        assert_eq!(record.url, "https://example.org/x");
        assert!(record.is_blank());
        assert_eq!(record.location, "");
        assert_eq!(record.department, None);
    }
}
