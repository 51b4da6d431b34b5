//! Application payload sent to the tracker server.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::{Department, JobRecord};

/// Tracking status of an application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Applied,
    Screening,
    Interview,
    Offer,
    Rejected,
}

/// User corrections applied on top of an extracted record.
#[derive(Debug, Clone, Default)]
pub struct RecordEdits {
    pub company_name: Option<String>,
    pub position: Option<String>,
    pub location: Option<String>,
    pub department: Option<String>,
    pub notes: Option<String>,
}

/// Create payload for `POST /api/applications`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationPayload {
    pub company_name: String,
    pub position: String,
    pub location: String,
    pub department: String,
    pub notes: String,
    pub status: ApplicationStatus,
    pub application_date: NaiveDate,
    pub job_url: String,
}

impl ApplicationPayload {
    /// Build a payload from an extracted record and the user's edits.
    pub fn from_record(record: &JobRecord, edits: &RecordEdits, today: NaiveDate) -> Self {
        let pick = |edit: &Option<String>, extracted: &str| {
            edit.as_deref().unwrap_or(extracted).trim().to_string()
        };

        let department = record.department.map(Department::as_str).unwrap_or("");
        let notes = edits
            .notes
            .clone()
            .unwrap_or_else(|| format!("Applied via {}", record.source));

        Self {
            company_name: pick(&edits.company_name, &record.company_name),
            position: pick(&edits.position, &record.position),
            location: pick(&edits.location, &record.location),
            department: canonical_department(pick(&edits.department, department)),
            notes,
            status: ApplicationStatus::Applied,
            application_date: today,
            job_url: record.url.clone(),
        }
    }

    /// Check the fields the tracker server requires.
    pub fn validate(&self) -> Result<()> {
        if self.company_name.is_empty() || self.position.is_empty() {
            return Err(AppError::validation("Company and Position are required"));
        }
        Ok(())
    }
}

/// Use the vocabulary spelling for known departments, keep others as typed.
fn canonical_department(name: String) -> String {
    Department::parse(&name).map_or(name, |d| d.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> JobRecord {
        JobRecord {
            source: "Greenhouse".into(),
            company_name: "Acme".into(),
            position: "Data Analyst".into(),
            location: "Remote".into(),
            department: Some(Department::Data),
            url: "https://boards.greenhouse.io/acme/jobs/1".into(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    #[test]
    fn test_payload_defaults() {
        let payload = ApplicationPayload::from_record(&record(), &RecordEdits::default(), today());
        assert_eq!(payload.notes, "Applied via Greenhouse");
        assert_eq!(payload.department, "Data");
        assert_eq!(payload.status, ApplicationStatus::Applied);
        assert_eq!(payload.job_url, "https://boards.greenhouse.io/acme/jobs/1");

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["applicationDate"], "2026-10-17");
        assert_eq!(json["status"], "applied");
        assert_eq!(json["companyName"], "Acme");
    }

    #[test]
    fn test_edits_override_record() {
        let edits = RecordEdits {
            company_name: Some("Acme Inc.".into()),
            department: Some("hr".into()),
            notes: Some("Referral".into()),
            ..RecordEdits::default()
        };
        let payload = ApplicationPayload::from_record(&record(), &edits, today());
        assert_eq!(payload.company_name, "Acme Inc.");
        assert_eq!(payload.department, "HR");
        assert_eq!(payload.position, "Data Analyst");
        assert_eq!(payload.notes, "Referral");
    }

    #[test]
    fn test_validate_requires_company_and_position() {
        let mut blank = record();
        blank.position.clear();
        let payload = ApplicationPayload::from_record(&blank, &RecordEdits::default(), today());
        assert!(matches!(payload.validate(), Err(AppError::Validation(_))));
    }
}
