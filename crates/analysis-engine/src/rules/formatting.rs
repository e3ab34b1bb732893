use shared_types::{Issue, IssueCategory, Severity};

use crate::patterns::NUMBERED_CLAUSE_PATTERN;

/// Minimum blank-line-delimited paragraphs before a document counts as
/// structured.
const MIN_PARAGRAPHS: usize = 3;

/// Two independent low-severity structure checks: paragraph count and
/// numbered-clause presence. At most two issues.
pub fn check_formatting(text: &str) -> Vec<Issue> {
    let mut issues = Vec::new();

    let paragraphs = text.split("\n\n").count();
    if paragraphs < MIN_PARAGRAPHS {
        issues.push(Issue {
            category: IssueCategory::FormattingIssue,
            severity: Severity::Low,
            description: "Document appears to have insufficient structure".to_string(),
            location: None,
            suggestion: "Organize document into clear sections with proper headings"
                .to_string(),
            reference: "ADGM Document Standards".to_string(),
        });
    }

    if !NUMBERED_CLAUSE_PATTERN.is_match(text) {
        issues.push(Issue {
            category: IssueCategory::FormattingIssue,
            severity: Severity::Low,
            description: "Document lacks proper clause numbering".to_string(),
            location: None,
            suggestion: "Add numbered clauses for better organization".to_string(),
            reference: "ADGM Document Standards".to_string(),
        });
    }

    issues
}
