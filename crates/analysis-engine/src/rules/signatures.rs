use shared_types::{Issue, IssueCategory, Severity};

use crate::patterns::SIGNATURE_PATTERNS;

/// Presence check: if no signature indicator matches anywhere, emit exactly
/// one issue. Never more than one regardless of document length.
pub fn check_missing_signatures(text: &str) -> Vec<Issue> {
    let signature_found = SIGNATURE_PATTERNS.iter().any(|p| p.is_match(text));
    if signature_found {
        return Vec::new();
    }

    vec![Issue {
        category: IssueCategory::MissingSignatures,
        severity: Severity::High,
        description: "Missing signature section".to_string(),
        location: None,
        suggestion: "Add proper signature blocks with witness signatures".to_string(),
        reference: "ADGM Companies Regulations 2020".to_string(),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_absent_signature_section() {
        let issues = check_missing_signatures("A resolution without any execution section.");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::High);
        assert!(issues[0].location.is_none());
    }

    #[test]
    fn signed_by_counts_as_signature() {
        let issues = check_missing_signatures("Signed by the authorized signatory.");
        assert!(issues.is_empty());
    }

    #[test]
    fn empty_text_yields_single_issue() {
        assert_eq!(check_missing_signatures("").len(), 1);
    }
}
