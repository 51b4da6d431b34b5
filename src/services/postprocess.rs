//! Record post-processing: whitespace cleanup and department inference.

use crate::models::{Department, JobRecord};

/// Collapse whitespace runs (including newlines and tabs) and trim.
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Infer a department from a position title.
///
/// Departments are checked in vocabulary order and the first one whose
/// keyword occurs in the title (ignoring case) wins.
pub fn infer_department(position: &str) -> Option<Department> {
    let position = position.to_lowercase();
    Department::ALL
        .into_iter()
        .find(|dept| position.contains(dept.keyword()))
}

/// Normalize every text field and fill in the department if unset.
pub fn post_process(mut record: JobRecord) -> JobRecord {
    for field in [
        &mut record.source,
        &mut record.company_name,
        &mut record.position,
        &mut record.location,
        &mut record.url,
    ] {
        *field = normalize_whitespace(field);
    }

    if record.department.is_none() && !record.position.is_empty() {
        record.department = infer_department(&record.position);
    }

    record
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  Acme Corp \n"), "Acme Corp");
        assert_eq!(normalize_whitespace("a\t\tb\r\nc   d"), "a b c d");
        assert_eq!(normalize_whitespace(" \n\t "), "");
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(
            infer_department("Senior Data Engineering Manager"),
            Some(Department::Engineering)
        );
        assert_eq!(infer_department("Data Scientist"), Some(Department::Data));
        assert_eq!(
            infer_department("Software Engineer"),
            Some(Department::Engineering)
        );
        assert_eq!(infer_department("404 Not Found"), None);
    }

    #[test]
    fn test_case_insensitive_substring() {
        assert_eq!(infer_department("SALES lead"), Some(Department::Sales));
        // substring, not word match
        assert_eq!(infer_department("Chief Threat Officer"), Some(Department::Hr));
    }

    #[test]
    fn test_existing_department_is_kept() {
        let record = JobRecord {
            position: "Product Designer".into(),
            department: Some(Department::Design),
            ..JobRecord::default()
        };
        assert_eq!(post_process(record).department, Some(Department::Design));
    }

    #[test]
    fn test_post_process_is_idempotent() {
        let record = JobRecord {
            source: " Lever\n".into(),
            company_name: "\tAcme   Inc ".into(),
            position: "Marketing\n\nManager".into(),
            location: "  New   York ".into(),
            department: None,
            url: "https://jobs.lever.co/acme/1 ".into(),
        };
        let once = post_process(record);
        assert_eq!(once.company_name, "Acme Inc");
        assert_eq!(once.position, "Marketing Manager");
        assert_eq!(once.department, Some(Department::Marketing));
        assert_eq!(post_process(once.clone()), once);
    }
}
