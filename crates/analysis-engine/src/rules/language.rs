use shared_types::{Issue, IssueCategory, Severity, TextSpan};

use crate::patterns::HEDGING_PATTERNS;

/// Flag hedging language that weakens binding force. One issue per match
/// occurrence, quoting the matched phrase.
pub fn check_ambiguous_language(text: &str) -> Vec<Issue> {
    let mut issues = Vec::new();

    for pattern in HEDGING_PATTERNS.iter() {
        for found in pattern.find_iter(text) {
            issues.push(Issue {
                category: IssueCategory::AmbiguousLanguage,
                severity: Severity::Medium,
                description: format!("Ambiguous language found: '{}'", found.as_str()),
                location: Some(TextSpan {
                    start: found.start(),
                    end: found.end(),
                }),
                suggestion: "Replace with specific, binding language".to_string(),
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
    fn flags_hedging_phrases() {
        let text = "The company shall use best efforts, subject to approval by the board.";
        let issues = check_ambiguous_language(text);
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.severity == Severity::Medium));
        assert!(issues
            .iter()
            .any(|i| i.description.contains("best efforts")));
    }

    #[test]
    fn binding_language_passes() {
        let issues = check_ambiguous_language("The company shall pay within 30 days.");
        assert!(issues.is_empty());
    }
}
