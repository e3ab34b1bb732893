//! Annotation payloads for the document-writer collaborator
//!
//! The writer mutates the binary document format; this module only builds
//! the comment text, author, and highlight color for each issue, plus the
//! batch summary note and per-type compliance checklists. Everything here
//! is a pure projection of issue data.

use chrono::{DateTime, Utc};
use serde::Serialize;
use shared_types::{Issue, IssueCategory, Severity};

/// Comment author shown in the reviewed document.
pub const AUTHOR: &str = "ADGM Agent";

/// A single rendered comment for the writer to attach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub body: String,
    pub author: &'static str,
    /// Highlight color as an RGB hex string.
    pub color: &'static str,
}

fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "🚨",
        Severity::Medium => "⚠️",
        Severity::Low => "ℹ️",
    }
}

fn category_color(category: IssueCategory) -> &'static str {
    match category {
        IssueCategory::JurisdictionIssue => "FF0000",
        IssueCategory::MissingClause => "FF6600",
        IssueCategory::AmbiguousLanguage => "FF9900",
        IssueCategory::MissingSignatures => "FF0000",
        IssueCategory::IncompleteInfo => "FF9900",
        IssueCategory::NonCompliantStructure => "FF0000",
        IssueCategory::FormattingIssue => "0066CC",
    }
}

/// Render the writer payload for one issue.
pub fn comment_for_issue(issue: &Issue) -> Comment {
    let body = format!(
        "{} {}\n\n{}\n\nADGM Reference: {}\n\nSuggestion: {}",
        severity_icon(issue.severity),
        issue.category.title().to_uppercase(),
        issue.description,
        issue.reference,
        issue.suggestion,
    );

    Comment {
        body,
        author: AUTHOR,
        color: category_color(issue.category),
    }
}

/// Batch summary note placed at the top of the reviewed document.
pub fn summary_comment(issues: &[Issue]) -> String {
    if issues.is_empty() {
        return "No issues found. Document appears to be compliant with ADGM requirements."
            .to_string();
    }

    let high = issues.iter().filter(|i| i.severity == Severity::High).count();
    let medium = issues
        .iter()
        .filter(|i| i.severity == Severity::Medium)
        .count();
    let low = issues.iter().filter(|i| i.severity == Severity::Low).count();

    format!(
        "ADGM COMPLIANCE ANALYSIS SUMMARY\n\n\
         Total Issues Found: {}\n\
         - High Severity: {}\n\
         - Medium Severity: {}\n\
         - Low Severity: {}\n\n\
         Please review all comments throughout the document for detailed recommendations.",
        issues.len(),
        high,
        medium,
        low,
    )
}

/// Compliance checklist note for the registered formation document types.
pub fn checklist_for(document_type: &str) -> Option<&'static str> {
    match document_type {
        "Articles of Association" => Some(
            "ADGM COMPLIANCE CHECKLIST:\n\
             - Ensure ADGM jurisdiction is specified\n\
             - Include complete objects clause\n\
             - Specify share capital structure\n\
             - Include director appointment procedures\n\
             - Add shareholder rights and meetings\n\
             - Include registered office details",
        ),
        "Memorandum of Association" => Some(
            "ADGM COMPLIANCE CHECKLIST:\n\
             - Include company name and type\n\
             - Specify registered office address\n\
             - Include objects and powers\n\
             - Add liability of members\n\
             - Include capital structure",
        ),
        "Board Resolution" => Some(
            "ADGM COMPLIANCE CHECKLIST:\n\
             - Include meeting date and location\n\
             - List all directors present\n\
             - Include complete resolution text\n\
             - Add voting results\n\
             - Include signature blocks",
        ),
        "UBO Declaration" => Some(
            "ADGM COMPLIANCE CHECKLIST:\n\
             - Include all beneficial owner details\n\
             - Specify ownership percentages\n\
             - Include control structures\n\
             - Add declaration statements\n\
             - Include supporting documentation",
        ),
        _ => None,
    }
}

/// Output filename for a reviewed copy, e.g.
/// `reviewed_Board_Resolution_20250301_142233.docx`.
pub fn reviewed_filename(document_type: &str, at: DateTime<Utc>) -> String {
    format!(
        "reviewed_{}_{}.docx",
        document_type.replace(' ', "_"),
        at.format("%Y%m%d_%H%M%S"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use shared_types::TextSpan;

    fn high_issue() -> Issue {
        Issue {
            category: IssueCategory::JurisdictionIssue,
            severity: Severity::High,
            description: "Reference to UAE Federal Courts instead of ADGM".to_string(),
            location: Some(TextSpan { start: 0, end: 10 }),
            suggestion: "Replace with ADGM jurisdiction references".to_string(),
            reference: "ADGM Companies Regulations 2020, Article 6".to_string(),
        }
    }

    #[test]
    fn comment_carries_banner_reference_and_suggestion() {
        let comment = comment_for_issue(&high_issue());
        assert!(comment.body.contains("JURISDICTION ISSUE"));
        assert!(comment.body.contains("ADGM Reference: ADGM Companies Regulations 2020"));
        assert!(comment.body.contains("Suggestion: Replace with ADGM"));
        assert_eq!(comment.author, "ADGM Agent");
        assert_eq!(comment.color, "FF0000");
    }

    #[test]
    fn summary_counts_by_severity() {
        let mut low = high_issue();
        low.severity = Severity::Low;
        low.category = IssueCategory::FormattingIssue;

        let summary = summary_comment(&[high_issue(), low]);
        assert!(summary.contains("Total Issues Found: 2"));
        assert!(summary.contains("- High Severity: 1"));
        assert!(summary.contains("- Low Severity: 1"));
    }

    #[test]
    fn empty_issue_list_reports_compliance() {
        assert!(summary_comment(&[]).contains("No issues found"));
    }

    #[test]
    fn checklists_cover_formation_documents() {
        for doc_type in [
            "Articles of Association",
            "Memorandum of Association",
            "Board Resolution",
            "UBO Declaration",
        ] {
            assert!(checklist_for(doc_type).is_some(), "no checklist for {doc_type}");
        }
        assert!(checklist_for("Employment Contract").is_none());
    }

    #[test]
    fn reviewed_filename_stamps_type_and_time() {
        let at = Utc.with_ymd_and_hms(2025, 3, 1, 14, 22, 33).unwrap();
        assert_eq!(
            reviewed_filename("Board Resolution", at),
            "reviewed_Board_Resolution_20250301_142233.docx"
        );
    }
}
