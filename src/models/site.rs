// src/models/site.rs

//! Site identifiers and the per-site selector rules used for extraction.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A recognized job board, ATS or single-employer career site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteId {
    #[serde(rename = "linkedin")]
    LinkedIn,
    Indeed,
    Glassdoor,
    GoogleCareers,
    AppleJobs,
    MicrosoftCareers,
    NetflixJobs,
    Lever,
    Greenhouse,
    Unknown,
}

impl SiteId {
    /// Human-readable name used as the record `source`.
    ///
    /// Returns `None` for [`SiteId::Unknown`]; unknown pages are named after
    /// their hostname instead.
    pub fn display_name(self) -> Option<&'static str> {
        match self {
            SiteId::LinkedIn => Some("LinkedIn"),
            SiteId::Indeed => Some("Indeed"),
            SiteId::Glassdoor => Some("Glassdoor"),
            SiteId::GoogleCareers => Some("Google Careers"),
            SiteId::AppleJobs => Some("Apple Jobs"),
            SiteId::MicrosoftCareers => Some("Microsoft Careers"),
            SiteId::NetflixJobs => Some("Netflix Jobs"),
            SiteId::Lever => Some("Lever"),
            SiteId::Greenhouse => Some("Greenhouse"),
            SiteId::Unknown => None,
        }
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name().unwrap_or("Unknown"))
    }
}

/// URL substring patterns that classify a page into a site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSignature {
    pub site: SiteId,
    pub patterns: Vec<String>,
}

impl SiteSignature {
    /// Whether any pattern occurs in the URL.
    pub fn matches(&self, url: &str) -> bool {
        self.patterns.iter().any(|p| url.contains(p.as_str()))
    }
}

/// How a site's company name is obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanyRule {
    /// Single-employer career pages: the company is known up front.
    Constant(String),

    /// Ordered selector candidates, most current markup first.
    Selectors(Vec<String>),
}

/// Extraction rule for one site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteRule {
    /// Site this rule applies to
    pub site: SiteId,

    /// URL substrings identifying the site
    pub patterns: Vec<String>,

    /// Company name rule
    pub company: CompanyRule,

    /// Selector candidates for the position title
    #[serde(default)]
    pub position: Vec<String>,

    /// Selector candidates for the job location
    #[serde(default)]
    pub location: Vec<String>,
}

impl SiteRule {
    /// Create a rule whose company is read from the page.
    pub fn scraped(
        site: SiteId,
        patterns: &[&str],
        company: &[&str],
        position: &[&str],
        location: &[&str],
    ) -> Self {
        Self {
            site,
            patterns: to_strings(patterns),
            company: CompanyRule::Selectors(to_strings(company)),
            position: to_strings(position),
            location: to_strings(location),
        }
    }

    /// Create a rule for a single-employer career site.
    pub fn employer(
        site: SiteId,
        patterns: &[&str],
        company: &str,
        position: &[&str],
        location: &[&str],
    ) -> Self {
        Self {
            site,
            patterns: to_strings(patterns),
            company: CompanyRule::Constant(company.to_string()),
            position: to_strings(position),
            location: to_strings(location),
        }
    }

    /// The URL signature of this rule.
    pub fn signature(&self) -> SiteSignature {
        SiteSignature {
            site: self.site,
            patterns: self.patterns.clone(),
        }
    }

    /// Every selector this rule may evaluate.
    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        let company: &[String] = match &self.company {
            CompanyRule::Selectors(list) => list,
            CompanyRule::Constant(_) => &[],
        };
        company
            .iter()
            .chain(&self.position)
            .chain(&self.location)
            .map(String::as_str)
    }
}

/// Generic cascade applied when the site-specific pass leaves gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackRules {
    /// Meta tags tried for the company name
    #[serde(default = "defaults::company_meta")]
    pub company_meta: Vec<String>,

    /// Generic company selectors
    #[serde(default = "defaults::company")]
    pub company: Vec<String>,

    /// Meta tags tried for the position
    #[serde(default = "defaults::position_meta")]
    pub position_meta: Vec<String>,

    /// Use the document title after the position meta tags
    #[serde(default = "defaults::position_uses_title")]
    pub position_uses_title: bool,

    /// Generic position selectors
    #[serde(default = "defaults::position")]
    pub position: Vec<String>,

    /// Generic location selectors
    #[serde(default = "defaults::location")]
    pub location: Vec<String>,
}

impl Default for FallbackRules {
    fn default() -> Self {
        Self {
            company_meta: defaults::company_meta(),
            company: defaults::company(),
            position_meta: defaults::position_meta(),
            position_uses_title: defaults::position_uses_title(),
            position: defaults::position(),
            location: defaults::location(),
        }
    }
}

impl FallbackRules {
    /// Every selector the cascade may evaluate (meta names excluded).
    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.company
            .iter()
            .chain(&self.position)
            .chain(&self.location)
            .map(String::as_str)
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

mod defaults {
    use super::to_strings;

    pub fn company_meta() -> Vec<String> {
        to_strings(&["og:site_name", "author"])
    }
    pub fn company() -> Vec<String> {
        to_strings(&[
            ".company",
            ".employer",
            "[class*=\"company\"]",
            "[class*=\"employer\"]",
        ])
    }
    pub fn position_meta() -> Vec<String> {
        to_strings(&["og:title"])
    }
    pub fn position_uses_title() -> bool {
        true
    }
    pub fn position() -> Vec<String> {
        to_strings(&[
            "h1",
            ".title",
            ".job-title",
            "[class*=\"title\"]",
            "[class*=\"job\"]",
        ])
    }
    pub fn location() -> Vec<String> {
        to_strings(&[".location", "[class*=\"location\"]", "[class*=\"address\"]"])
    }
}
