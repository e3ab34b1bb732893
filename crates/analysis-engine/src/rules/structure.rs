use shared_types::{Issue, IssueCategory, Severity, TextSpan};

use crate::patterns::STRUCTURE_PATTERNS;

/// Flag corporate structures disallowed under ADGM rules (bearer shares,
/// nominee directors, offshore vehicles). One issue per match occurrence.
pub fn check_non_compliant_structures(text: &str) -> Vec<Issue> {
    let mut issues = Vec::new();

    for pattern in STRUCTURE_PATTERNS.iter() {
        for found in pattern.find_iter(text) {
            issues.push(Issue {
                category: IssueCategory::NonCompliantStructure,
                severity: Severity::High,
                description: format!("Non-compliant structure: '{}'", found.as_str()),
                location: Some(TextSpan {
                    start: found.start(),
                    end: found.end(),
                }),
                suggestion: "Review structure for ADGM compliance".to_string(),
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
    fn flags_bearer_shares() {
        let issues = check_non_compliant_structures("The company may issue bearer shares.");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::High);
        assert!(issues[0].description.contains("bearer shares"));
    }

    #[test]
    fn flags_nominee_director() {
        let issues =
            check_non_compliant_structures("A nominee director will hold the position.");
        assert!(!issues.is_empty());
    }

    #[test]
    fn ordinary_structure_passes() {
        let issues =
            check_non_compliant_structures("Registered shares held by natural persons.");
        assert!(issues.is_empty());
    }
}
