use shared_types::{Issue, IssueCategory, Severity, TextSpan};

use crate::patterns::JURISDICTION_PATTERNS;

/// Flag references to UAE federal jurisdiction where ADGM is expected.
/// One issue per match occurrence, carrying the matched span.
pub fn check_jurisdiction(text: &str) -> Vec<Issue> {
    let mut issues = Vec::new();

    for pattern in JURISDICTION_PATTERNS.iter() {
        for found in pattern.find_iter(text) {
            issues.push(Issue {
                category: IssueCategory::JurisdictionIssue,
                severity: Severity::High,
                description: "Reference to UAE Federal Courts instead of ADGM".to_string(),
                location: Some(TextSpan {
                    start: found.start(),
                    end: found.end(),
                }),
                suggestion: "Replace with ADGM jurisdiction references".to_string(),
                reference: "ADGM Companies Regulations 2020, Article 6".to_string(),
            });
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_uae_federal_courts() {
        let text = "This agreement is governed by UAE Federal Courts.";
        let issues = check_jurisdiction(text);
        assert!(!issues.is_empty());
        assert!(issues.iter().all(|i| i.severity == Severity::High));

        let span = issues[0].location.expect("match carries a span");
        assert_eq!(&text[span.start..span.end], "UAE Federal Courts");
    }

    #[test]
    fn flags_each_occurrence() {
        let text = "UAE Federal Courts shall decide. Appeals go to UAE Federal Courts too.";
        let issues = check_jurisdiction(text);
        assert!(issues.len() >= 2);
    }

    #[test]
    fn accepts_adgm_jurisdiction() {
        let issues = check_jurisdiction("Disputes are subject to the ADGM Courts.");
        assert!(issues.is_empty());
    }
}
