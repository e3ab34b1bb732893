use shared_types::{Issue, IssueCategory, Severity};

use crate::patterns::required_clauses_for;

/// Flag required clauses absent from the text for the given document type.
/// Substring match, case-insensitive; one issue per missing clause keyword.
/// Types with no registered clause list are skipped entirely.
pub fn check_missing_clauses(text: &str, document_type: &str) -> Vec<Issue> {
    let Some(required) = required_clauses_for(document_type) else {
        return Vec::new();
    };

    let text_lower = text.to_lowercase();
    required
        .iter()
        .filter(|clause| !text_lower.contains(&clause.to_lowercase()))
        .map(|clause| Issue {
            category: IssueCategory::MissingClause,
            severity: Severity::High,
            description: format!("Missing required clause: {clause}"),
            location: None,
            suggestion: format!("Add {clause} section to comply with ADGM requirements"),
            reference: "ADGM Companies Regulations 2020".to_string(),
        })
        .collect()
}
