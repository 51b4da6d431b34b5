//! Application configuration structures.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use scraper::Selector;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::{FallbackRules, SiteId, SiteRule};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP client settings for fetching pages
    #[serde(default)]
    pub http: HttpConfig,

    /// Tracker server settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Local record store settings
    #[serde(default)]
    pub storage: StorageConfig,

    /// Site rules and fallback cascade
    #[serde(default)]
    pub extractor: ExtractorConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Write configuration as TOML.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::validation("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }
        if self.http.max_concurrent == 0 {
            return Err(AppError::validation("http.max_concurrent must be > 0"));
        }
        if self.storage.records_file.trim().is_empty() {
            return Err(AppError::validation("storage.records_file is empty"));
        }
        self.extractor.validate()
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Maximum pages fetched at once
    #[serde(default = "defaults::max_concurrent")]
    pub max_concurrent: usize,

    /// Delay between page fetches in milliseconds
    #[serde(default)]
    pub request_delay_ms: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            max_concurrent: defaults::max_concurrent(),
            request_delay_ms: 0,
        }
    }
}

/// Tracker server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the tracker server
    #[serde(default = "defaults::server_url")]
    pub server_url: String,

    /// Session cookie sent with submissions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_cookie: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            server_url: defaults::server_url(),
            session_cookie: None,
        }
    }
}

/// Local record store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON file holding saved applications
    #[serde(default = "defaults::records_file")]
    pub records_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            records_file: defaults::records_file(),
        }
    }
}

/// Extraction rules. Built once and handed to the extractor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Site rules, checked in order
    #[serde(default = "defaults::sites")]
    pub sites: Vec<SiteRule>,

    /// Generic cascade for unknown sites and missing fields
    #[serde(default)]
    pub fallback: FallbackRules,

    /// URL patterns that mark a page as a job posting
    #[serde(default = "defaults::job_site_patterns")]
    pub job_site_patterns: Vec<String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            sites: defaults::sites(),
            fallback: FallbackRules::default(),
            job_site_patterns: defaults::job_site_patterns(),
        }
    }
}

impl ExtractorConfig {
    /// Validate the site registry and every selector it holds.
    pub fn validate(&self) -> Result<()> {
        if self.sites.is_empty() {
            return Err(AppError::validation("No site rules defined"));
        }

        let mut seen = HashSet::new();
        for rule in &self.sites {
            if rule.site == SiteId::Unknown {
                return Err(AppError::validation("Site rule cannot use the 'unknown' id"));
            }
            if !seen.insert(rule.site) {
                return Err(AppError::validation(format!(
                    "Duplicate site rule for {}",
                    rule.site
                )));
            }
            if rule.patterns.iter().all(|p| p.trim().is_empty()) {
                return Err(AppError::validation(format!(
                    "Site rule for {} has no URL patterns",
                    rule.site
                )));
            }
        }

        if self.job_site_patterns.is_empty() {
            return Err(AppError::validation("No job site patterns defined"));
        }

        self.sites
            .iter()
            .flat_map(|rule| rule.selectors())
            .chain(self.fallback.selectors())
            .try_for_each(check_selector)
    }
}

fn check_selector(s: &str) -> Result<()> {
    Selector::parse(s)
        .map(|_| ())
        .map_err(|e| AppError::selector(s, format!("{e:?}")))
}

mod defaults {
    use crate::models::{SiteId, SiteRule};

    // HTTP defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; JobTracker/1.0)".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn max_concurrent() -> usize {
        4
    }

    // API defaults
    pub fn server_url() -> String {
        "https://jobtrackpro-production.up.railway.app".into()
    }

    // Storage defaults
    pub fn records_file() -> String {
        "applications.json".into()
    }

    // Site registry, in classification priority order
    pub fn sites() -> Vec<SiteRule> {
        vec![
            SiteRule::scraped(
                SiteId::LinkedIn,
                &["linkedin.com/jobs"],
                &[
                    ".job-details-jobs-unified-top-card__company-name a",
                    ".jobs-unified-top-card__company-name a",
                    ".job-details-jobs-unified-top-card__company-name",
                    ".jobs-unified-top-card__company-name",
                ],
                &[
                    ".job-details-jobs-unified-top-card__job-title h1",
                    ".jobs-unified-top-card__job-title h1",
                    ".job-details-jobs-unified-top-card__job-title",
                    ".jobs-unified-top-card__job-title",
                ],
                &[
                    ".job-details-jobs-unified-top-card__primary-description-container .jobs-unified-top-card__bullet",
                    ".jobs-unified-top-card__primary-description-container .jobs-unified-top-card__bullet",
                    ".job-details-jobs-unified-top-card__bullet",
                    ".jobs-unified-top-card__bullet",
                ],
            ),
            SiteRule::scraped(
                SiteId::Indeed,
                &["indeed.com"],
                &[
                    "[data-testid=\"inlineHeader-companyName\"] a",
                    ".jobsearch-CompanyInfoContainer a",
                    "[data-testid=\"inlineHeader-companyName\"]",
                    ".jobsearch-InlineCompanyRating + a",
                ],
                &[
                    "[data-testid=\"jobsearch-JobInfoHeader-title\"]",
                    ".jobsearch-JobInfoHeader-title",
                    "h1[data-jk]",
                ],
                &[
                    "[data-testid=\"job-location\"]",
                    ".jobsearch-JobInfoHeader-subtitle",
                    "[data-testid=\"jobsearch-JobInfoHeader-subtitle\"]",
                ],
            ),
            SiteRule::scraped(
                SiteId::Glassdoor,
                &["glassdoor.com"],
                &[".employer-name", "[data-test=\"employer-name\"]", ".employerName"],
                &[".job-title", "[data-test=\"job-title\"]", ".jobTitle"],
                &[".job-location", "[data-test=\"job-location\"]", ".jobLocation"],
            ),
            SiteRule::employer(
                SiteId::GoogleCareers,
                &["careers.google.com"],
                "Google",
                &[".gc-job-detail__title", "h1"],
                &[".gc-job-detail__location"],
            ),
            SiteRule::employer(
                SiteId::AppleJobs,
                &["jobs.apple.com"],
                "Apple",
                &[".hero-headline", "h1"],
                &[".hero-location"],
            ),
            SiteRule::employer(
                SiteId::MicrosoftCareers,
                &["careers.microsoft.com"],
                "Microsoft",
                &[".job-title", "h1"],
                &[".job-location"],
            ),
            SiteRule::employer(
                SiteId::NetflixJobs,
                &["jobs.netflix.com"],
                "Netflix",
                &["h1", ".job-title"],
                &[".job-location", ".location"],
            ),
            SiteRule::scraped(
                SiteId::Lever,
                &["jobs.lever.co"],
                &[".main-header-text a", ".company-name", "header a"],
                &[".posting-headline h2", ".posting-title", "h2"],
                &[".posting-categories .location", ".posting-location", ".location"],
            ),
            SiteRule::scraped(
                SiteId::Greenhouse,
                &["boards.greenhouse.io"],
                &[".company-name", "header h1", ".app-title"],
                &[".app-title", ".job-title", "h1"],
                &[".location", ".job-location"],
            ),
        ]
    }

    // Broader list used only for the "is a job page" signal
    pub fn job_site_patterns() -> Vec<String> {
        [
            "linkedin.com/jobs",
            "indeed.com/viewjob",
            "glassdoor.com/job-listing",
            "jobs.lever.co",
            "boards.greenhouse.io",
            "careers.google.com",
            "jobs.apple.com",
            "careers.microsoft.com",
            "jobs.netflix.com",
            "careers.stripe.com",
            "jobs.spotify.com",
            "uber.com/careers",
            "tesla.com/careers",
            "metacareers.com",
            "careers.airbnb.com",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }
}
