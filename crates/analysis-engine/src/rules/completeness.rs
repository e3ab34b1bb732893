use shared_types::{Issue, IssueCategory, Severity, TextSpan};

use crate::patterns::PLACEHOLDER_PATTERNS;

/// Flag placeholder/unfinished content (TBD, bracketed placeholders,
/// underscore runs). One issue per match occurrence.
pub fn check_incomplete_info(text: &str) -> Vec<Issue> {
    let mut issues = Vec::new();

    for pattern in PLACEHOLDER_PATTERNS.iter() {
        for found in pattern.find_iter(text) {
            issues.push(Issue {
                category: IssueCategory::IncompleteInfo,
                severity: Severity::Medium,
                description: format!("Incomplete information: '{}'", found.as_str()),
                location: Some(TextSpan {
                    start: found.start(),
                    end: found.end(),
                }),
                suggestion: "Complete all required information before submission".to_string(),
                reference: "ADGM Companies Regulations 2020".to_string(),
            });
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_tbd_and_placeholders() {
        let text = "Share capital: TBD. Registered office: [insert address].";
        let issues = check_incomplete_info(text);
        assert!(issues.len() >= 2);
        assert!(issues.iter().all(|i| i.severity == Severity::Medium));
        assert!(issues
            .iter()
            .any(|i| i.description.contains("[insert address]")));
    }

    #[test]
    fn flags_underscore_runs() {
        let issues = check_incomplete_info("Name: ______ Date: ______");
        assert_eq!(issues.len(), 2);
    }

    #[test]
    fn complete_text_passes() {
        let issues = check_incomplete_info("Share capital is USD 50,000 fully paid.");
        assert!(issues.is_empty());
    }
}
