//! Job record produced by extraction.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Controlled department vocabulary, in inference priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Engineering,
    Marketing,
    Sales,
    Product,
    Design,
    Operations,
    Finance,
    Legal,
    #[serde(rename = "HR")]
    Hr,
    Data,
    Security,
}

impl Department {
    /// All departments in the order they are tried.
    pub const ALL: [Department; 11] = [
        Department::Engineering,
        Department::Marketing,
        Department::Sales,
        Department::Product,
        Department::Design,
        Department::Operations,
        Department::Finance,
        Department::Legal,
        Department::Hr,
        Department::Data,
        Department::Security,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Department::Engineering => "Engineering",
            Department::Marketing => "Marketing",
            Department::Sales => "Sales",
            Department::Product => "Product",
            Department::Design => "Design",
            Department::Operations => "Operations",
            Department::Finance => "Finance",
            Department::Legal => "Legal",
            Department::Hr => "HR",
            Department::Data => "Data",
            Department::Security => "Security",
        }
    }

    /// Lowercase keyword searched for in position titles.
    ///
    /// Engineering matches on its stem so that "Engineer" titles count.
    pub fn keyword(self) -> &'static str {
        match self {
            Department::Engineering => "engineer",
            Department::Marketing => "marketing",
            Department::Sales => "sales",
            Department::Product => "product",
            Department::Design => "design",
            Department::Operations => "operations",
            Department::Finance => "finance",
            Department::Legal => "legal",
            Department::Hr => "hr",
            Department::Data => "data",
            Department::Security => "security",
        }
    }

    /// Look up a department by name, ignoring case.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A best-effort structured record for one job posting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    /// Site name, or the page hostname for unrecognized sites
    pub source: String,

    /// Hiring company (empty when extraction failed)
    pub company_name: String,

    /// Position title (empty when extraction failed)
    pub position: String,

    /// Job location
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub location: String,

    /// Department inferred from the position title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,

    /// Page the record was extracted from
    pub url: String,
}

impl JobRecord {
    /// Start an empty record for a page.
    pub fn new(source: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    /// Whether the fallback cascade should run.
    pub fn needs_fallback(&self) -> bool {
        self.company_name.is_empty() || self.position.is_empty()
    }

    /// Whether nothing useful was extracted.
    pub fn is_blank(&self) -> bool {
        self.company_name.is_empty() && self.position.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_order_matches_vocabulary() {
        let names: Vec<_> = Department::ALL.iter().map(|d| d.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Engineering",
                "Marketing",
                "Sales",
                "Product",
                "Design",
                "Operations",
                "Finance",
                "Legal",
                "HR",
                "Data",
                "Security"
            ]
        );
    }

    #[test]
    fn test_department_parse() {
        assert_eq!(Department::parse("hr"), Some(Department::Hr));
        assert_eq!(Department::parse(" Data "), Some(Department::Data));
        assert_eq!(Department::parse("Research"), None);
    }

    #[test]
    fn test_record_json_shape() {
        let record = JobRecord {
            source: "LinkedIn".into(),
            company_name: "Acme Corp".into(),
            position: "Software Engineer".into(),
            location: String::new(),
            department: Some(Department::Engineering),
            url: "https://www.linkedin.com/jobs/view/123".into(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["companyName"], "Acme Corp");
        assert_eq!(json["department"], "Engineering");
        assert!(json.get("location").is_none());
    }

    #[test]
    fn test_needs_fallback() {
        let mut record = JobRecord::new("Lever", "https://jobs.lever.co/x");
        assert!(record.needs_fallback());
        record.company_name = "Acme".into();
        assert!(record.needs_fallback());
        record.position = "Designer".into();
        assert!(!record.needs_fallback());
    }
}
