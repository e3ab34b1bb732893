use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Issue severity, ranked Low < Medium < High.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Numeric rank used for aggregation (Low=1, Medium=2, High=3).
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Low => 1,
            Severity::Medium => 2,
            Severity::High => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed taxonomy of detectable compliance issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    JurisdictionIssue,
    MissingClause,
    AmbiguousLanguage,
    MissingSignatures,
    IncompleteInfo,
    NonCompliantStructure,
    FormattingIssue,
}

impl IssueCategory {
    /// All categories in rule-execution order.
    pub const ALL: [IssueCategory; 7] = [
        IssueCategory::JurisdictionIssue,
        IssueCategory::MissingClause,
        IssueCategory::AmbiguousLanguage,
        IssueCategory::MissingSignatures,
        IssueCategory::IncompleteInfo,
        IssueCategory::NonCompliantStructure,
        IssueCategory::FormattingIssue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCategory::JurisdictionIssue => "jurisdiction_issue",
            IssueCategory::MissingClause => "missing_clause",
            IssueCategory::AmbiguousLanguage => "ambiguous_language",
            IssueCategory::MissingSignatures => "missing_signatures",
            IssueCategory::IncompleteInfo => "incomplete_info",
            IssueCategory::NonCompliantStructure => "non_compliant_structure",
            IssueCategory::FormattingIssue => "formatting_issue",
        }
    }

    /// Human-readable title, e.g. "Jurisdiction Issue".
    pub fn title(&self) -> &'static str {
        match self {
            IssueCategory::JurisdictionIssue => "Jurisdiction Issue",
            IssueCategory::MissingClause => "Missing Clause",
            IssueCategory::AmbiguousLanguage => "Ambiguous Language",
            IssueCategory::MissingSignatures => "Missing Signatures",
            IssueCategory::IncompleteInfo => "Incomplete Info",
            IssueCategory::NonCompliantStructure => "Non Compliant Structure",
            IssueCategory::FormattingIssue => "Formatting Issue",
        }
    }
}

/// Byte-offset span into the analyzed text, for highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSpan {
    pub start: usize,
    pub end: usize,
}

impl fmt::Display for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position {}-{}", self.start, self.end)
    }
}

/// A single rule-detected compliance issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub category: IssueCategory,
    pub severity: Severity,
    pub description: String,
    /// Absent for presence checks (missing clause/signature, formatting).
    pub location: Option<TextSpan>,
    pub suggestion: String,
    pub reference: String,
}

/// Document type classification with keyword-coverage confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub document_type: String,
    /// matched keywords / total keywords, in [0, 1]. Zero means
    /// "unclassified", not an error.
    pub confidence: f32,
}

/// Per-category issue counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub jurisdiction_issues: usize,
    pub missing_clauses: usize,
    pub ambiguous_language: usize,
    pub missing_signatures: usize,
    pub incomplete_info: usize,
    pub non_compliant_structures: usize,
    pub formatting_issues: usize,
}

impl CategorySummary {
    pub fn tally(issues: &[Issue]) -> Self {
        let mut summary = CategorySummary::default();
        for issue in issues {
            match issue.category {
                IssueCategory::JurisdictionIssue => summary.jurisdiction_issues += 1,
                IssueCategory::MissingClause => summary.missing_clauses += 1,
                IssueCategory::AmbiguousLanguage => summary.ambiguous_language += 1,
                IssueCategory::MissingSignatures => summary.missing_signatures += 1,
                IssueCategory::IncompleteInfo => summary.incomplete_info += 1,
                IssueCategory::NonCompliantStructure => summary.non_compliant_structures += 1,
                IssueCategory::FormattingIssue => summary.formatting_issues += 1,
            }
        }
        summary
    }

    pub fn count(&self, category: IssueCategory) -> usize {
        match category {
            IssueCategory::JurisdictionIssue => self.jurisdiction_issues,
            IssueCategory::MissingClause => self.missing_clauses,
            IssueCategory::AmbiguousLanguage => self.ambiguous_language,
            IssueCategory::MissingSignatures => self.missing_signatures,
            IssueCategory::IncompleteInfo => self.incomplete_info,
            IssueCategory::NonCompliantStructure => self.non_compliant_structures,
            IssueCategory::FormattingIssue => self.formatting_issues,
        }
    }

    /// Labelled counts in category order, for report rendering.
    pub fn entries(&self) -> [(&'static str, usize); 7] {
        [
            ("Jurisdiction Issues", self.jurisdiction_issues),
            ("Missing Clauses", self.missing_clauses),
            ("Ambiguous Language", self.ambiguous_language),
            ("Missing Signatures", self.missing_signatures),
            ("Incomplete Info", self.incomplete_info),
            ("Non Compliant Structures", self.non_compliant_structures),
            ("Formatting Issues", self.formatting_issues),
        ]
    }
}

/// Aggregated red-flag analysis for one document.
///
/// Derived entirely from the issue list; `has_issues` keeps "Low with zero
/// issues" distinguishable from "Low with issues" even though both carry the
/// `Low` severity label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    pub document_type: String,
    pub total_issues: usize,
    pub overall_severity: Severity,
    pub has_issues: bool,
    /// Rule-execution order, stable across runs.
    pub issues: Vec<Issue>,
    pub summary: CategorySummary,
}

impl DocumentAnalysis {
    pub fn from_issues(document_type: impl Into<String>, issues: Vec<Issue>) -> Self {
        let overall_severity = issues
            .iter()
            .map(|issue| issue.severity)
            .max()
            .unwrap_or(Severity::Low);

        DocumentAnalysis {
            document_type: document_type.into(),
            total_issues: issues.len(),
            overall_severity,
            has_issues: !issues.is_empty(),
            summary: CategorySummary::tally(&issues),
            issues,
        }
    }

    /// Group issues by category, preserving in-category order.
    pub fn issues_by_category(&self) -> HashMap<IssueCategory, Vec<&Issue>> {
        let mut grouped: HashMap<IssueCategory, Vec<&Issue>> = HashMap::new();
        for issue in &self.issues {
            grouped.entry(issue.category).or_default().push(issue);
        }
        grouped
    }
}

/// Result of inferring the overarching legal process from a document batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessDetection {
    pub process: String,
    pub required: Vec<String>,
    /// Required types not present in the uploaded set, in required order.
    pub missing: Vec<String>,
    pub uploaded_count: usize,
    pub required_count: usize,
}

/// One flattened issue row in the structured report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportIssue {
    pub document: String,
    /// Rendered location, or the literal "General" when the issue carries
    /// no span.
    pub section: String,
    pub issue: String,
    pub severity: Severity,
    pub suggestion: String,
}

/// Final structured report over a document batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub process: String,
    pub documents_uploaded: usize,
    pub required_documents: usize,
    /// First missing document type, or empty when none.
    pub missing_document: String,
    pub issues_found: Vec<ReportIssue>,
}

/// Raw input document as supplied by the extraction collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDocument {
    pub name: String,
    pub text: String,
}

impl SourceDocument {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        SourceDocument {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Per-document pipeline output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentResult {
    pub file_name: String,
    pub document_type: String,
    pub confidence: f32,
    pub word_count: usize,
    pub analysis: DocumentAnalysis,
}

/// Full batch output: per-document results plus the batch-level process
/// detection (absent for an empty batch).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchAnalysis {
    pub documents: Vec<DocumentResult>,
    pub detection: Option<ProcessDetection>,
    pub checked_at: u64,
}
