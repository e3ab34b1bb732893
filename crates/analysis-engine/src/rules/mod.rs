//! Red-flag rule checks
//!
//! Each module implements one issue category. All categories run on every
//! document, in a fixed order, and never short-circuit on earlier findings.

pub mod clauses;
pub mod completeness;
pub mod formatting;
pub mod jurisdiction;
pub mod language;
pub mod signatures;
pub mod structure;

use shared_types::{DocumentAnalysis, Issue};

/// Runs every rule category over a document and aggregates the findings.
pub struct RedFlagChecker;

impl RedFlagChecker {
    pub fn new() -> Self {
        Self
    }

    /// Full analysis: every category, fixed execution order, stable output.
    pub fn analyze(&self, text: &str, document_type: &str) -> DocumentAnalysis {
        DocumentAnalysis::from_issues(document_type, self.check_text(text, document_type))
    }

    /// Raw issue list in rule-execution order.
    pub fn check_text(&self, text: &str, document_type: &str) -> Vec<Issue> {
        let mut issues = Vec::new();
        issues.extend(jurisdiction::check_jurisdiction(text));
        issues.extend(clauses::check_missing_clauses(text, document_type));
        issues.extend(language::check_ambiguous_language(text));
        issues.extend(signatures::check_missing_signatures(text));
        issues.extend(completeness::check_incomplete_info(text));
        issues.extend(structure::check_non_compliant_structures(text));
        issues.extend(formatting::check_formatting(text));
        issues
    }
}

impl Default for RedFlagChecker {
    fn default() -> Self {
        Self::new()
    }
}
