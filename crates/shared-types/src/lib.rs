pub mod types;

pub use types::{
    BatchAnalysis, CategorySummary, Classification, DocumentAnalysis, DocumentResult, Issue,
    IssueCategory, ProcessDetection, Report, ReportIssue, Severity, SourceDocument, TextSpan,
};
