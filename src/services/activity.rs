//! Job posting page detection.
//!
//! Drives the "job page detected" indicator. It uses a broader pattern list
//! than the classifier and is independent of extraction.

/// Tooltip shown when the current page is a job posting.
pub const ACTIVE_TOOLTIP: &str = "JobTracker - Click to extract job details";

/// Tooltip shown otherwise.
pub const INACTIVE_TOOLTIP: &str = "JobTracker - No job posting detected";

/// Detects job posting pages by URL substring.
pub struct ActivityDetector {
    patterns: Vec<String>,
}

impl ActivityDetector {
    pub fn new(patterns: Vec<String>) -> Self {
        Self { patterns }
    }

    /// Whether the URL looks like a job posting page.
    pub fn is_job_posting_page(&self, url: &str) -> bool {
        self.patterns.iter().any(|p| url.contains(p.as_str()))
    }

    /// Indicator tooltip for a URL.
    pub fn tooltip(&self, url: &str) -> &'static str {
        if self.is_job_posting_page(url) {
            ACTIVE_TOOLTIP
        } else {
            INACTIVE_TOOLTIP
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExtractorConfig;

    fn detector() -> ActivityDetector {
        ActivityDetector::new(ExtractorConfig::default().job_site_patterns)
    }

    #[test]
    fn test_detects_extraction_and_signal_only_sites() {
        let d = detector();
        assert!(d.is_job_posting_page("https://www.linkedin.com/jobs/view/1"));
        assert!(d.is_job_posting_page("https://jobs.spotify.com/job/abc"));
        assert!(d.is_job_posting_page("https://www.tesla.com/careers/search/job/1"));
    }

    #[test]
    fn test_indeed_requires_viewjob() {
        let d = detector();
        assert!(d.is_job_posting_page("https://www.indeed.com/viewjob?jk=1"));
        assert!(!d.is_job_posting_page("https://www.indeed.com/companies"));
    }

    #[test]
    fn test_tooltip() {
        let d = detector();
        assert_eq!(d.tooltip("https://jobs.lever.co/acme/1"), ACTIVE_TOOLTIP);
        assert_eq!(d.tooltip("https://news.ycombinator.com"), INACTIVE_TOOLTIP);
    }
}
