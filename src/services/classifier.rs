//! Site classification service.
//!
//! Maps a page URL to a known site by substring matching against the
//! registry, in registry order.

use crate::models::{SiteId, SiteRule, SiteSignature};
use crate::utils::hostname_or_raw;

/// Result of classifying a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub site: SiteId,

    /// Human-readable source name for the record
    pub source: String,
}

/// Service for recognizing job sites from their URL.
pub struct SiteClassifier {
    signatures: Vec<SiteSignature>,
}

impl SiteClassifier {
    /// Create a classifier from signatures, checked in the given order.
    pub fn new(signatures: Vec<SiteSignature>) -> Self {
        Self { signatures }
    }

    /// Create a classifier from the signatures of a site registry.
    pub fn from_rules(rules: &[SiteRule]) -> Self {
        Self::new(rules.iter().map(SiteRule::signature).collect())
    }

    /// Classify a URL. The first signature with a matching pattern wins.
    pub fn classify(&self, url: &str) -> Classification {
        let site = self
            .signatures
            .iter()
            .find(|sig| sig.matches(url))
            .map_or(SiteId::Unknown, |sig| sig.site);

        let source = match site.display_name() {
            Some(name) => name.to_string(),
            None => hostname_or_raw(url),
        };

        log::debug!("Classified {} as {:?}", url, site);
        Classification { site, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExtractorConfig;

    fn classifier() -> SiteClassifier {
        SiteClassifier::from_rules(&ExtractorConfig::default().sites)
    }

    #[test]
    fn test_known_sites() {
        let c = classifier();
        let cases = [
            ("https://www.linkedin.com/jobs/view/123", SiteId::LinkedIn, "LinkedIn"),
            ("https://www.indeed.com/viewjob?jk=abc", SiteId::Indeed, "Indeed"),
            ("https://www.glassdoor.com/job-listing/x", SiteId::Glassdoor, "Glassdoor"),
            ("https://careers.google.com/jobs/results/1", SiteId::GoogleCareers, "Google Careers"),
            ("https://jobs.apple.com/en-us/details/xyz", SiteId::AppleJobs, "Apple Jobs"),
            ("https://careers.microsoft.com/us/en/job/1", SiteId::MicrosoftCareers, "Microsoft Careers"),
            ("https://jobs.netflix.com/jobs/1", SiteId::NetflixJobs, "Netflix Jobs"),
            ("https://jobs.lever.co/acme/1", SiteId::Lever, "Lever"),
            ("https://boards.greenhouse.io/acme/jobs/1", SiteId::Greenhouse, "Greenhouse"),
        ];
        for (url, site, source) in cases {
            let result = c.classify(url);
            assert_eq!(result.site, site, "{url}");
            assert_eq!(result.source, source, "{url}");
        }
    }

    #[test]
    fn test_linkedin_requires_jobs_path() {
        let result = classifier().classify("https://www.linkedin.com/feed/");
        assert_eq!(result.site, SiteId::Unknown);
        assert_eq!(result.source, "www.linkedin.com");
    }

    #[test]
    fn test_registry_order_wins() {
        // Contains both a LinkedIn and a Lever pattern; LinkedIn is earlier.
        let url = "https://www.linkedin.com/jobs/view/1?ref=jobs.lever.co";
        assert_eq!(classifier().classify(url).site, SiteId::LinkedIn);
    }

    #[test]
    fn test_unknown_uses_hostname() {
        let result = classifier().classify("https://unknownboard.example.com/posting/1");
        assert_eq!(result.site, SiteId::Unknown);
        assert_eq!(result.source, "unknownboard.example.com");
    }

    #[test]
    fn test_malformed_url_falls_back_to_raw() {
        let result = classifier().classify("not a url");
        assert_eq!(result.site, SiteId::Unknown);
        assert_eq!(result.source, "not a url");
    }
}
