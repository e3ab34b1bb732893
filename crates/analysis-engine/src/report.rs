//! Structured report assembly and rendering
//!
//! Pure projections of per-document analyses plus the batch-level process
//! detection: the JSON report object, a flat CSV view of the issue rows,
//! and a human-readable markdown summary per document.

use shared_types::{
    BatchAnalysis, DocumentAnalysis, ProcessDetection, Report, ReportIssue,
};

/// Section label used when an issue carries no text span.
const GENERAL_SECTION: &str = "General";

/// Merge the process detection and per-document analyses into one report.
///
/// Deterministic given identical inputs. `detection` is absent for an empty
/// batch, which yields an empty process and zero counts.
pub fn build_report(
    detection: Option<&ProcessDetection>,
    analyses: &[&DocumentAnalysis],
) -> Report {
    let issues_found = analyses
        .iter()
        .flat_map(|analysis| {
            analysis.issues.iter().map(|issue| ReportIssue {
                document: analysis.document_type.clone(),
                section: issue
                    .location
                    .map(|span| span.to_string())
                    .unwrap_or_else(|| GENERAL_SECTION.to_string()),
                issue: issue.description.clone(),
                severity: issue.severity,
                suggestion: issue.suggestion.clone(),
            })
        })
        .collect();

    Report {
        process: detection.map(|d| d.process.clone()).unwrap_or_default(),
        documents_uploaded: analyses.len(),
        required_documents: detection.map(|d| d.required_count).unwrap_or(0),
        missing_document: detection
            .and_then(|d| d.missing.first().cloned())
            .unwrap_or_default(),
        issues_found,
    }
}

/// Build the report straight from a batch result.
pub fn from_batch(batch: &BatchAnalysis) -> Report {
    let analyses: Vec<&DocumentAnalysis> =
        batch.documents.iter().map(|doc| &doc.analysis).collect();
    build_report(batch.detection.as_ref(), &analyses)
}

/// Serialize the report as pretty-printed JSON.
pub fn to_json(report: &Report) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Flat CSV projection of the issue rows alone.
pub fn issues_to_csv(issues: &[ReportIssue]) -> String {
    let mut out = String::from("document,section,issue,severity,suggestion\n");
    for issue in issues {
        let row = [
            issue.document.as_str(),
            issue.section.as_str(),
            issue.issue.as_str(),
            issue.severity.as_str(),
            issue.suggestion.as_str(),
        ];
        let line: Vec<String> = row.iter().map(|field| csv_field(field)).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }
    out
}

/// Quote a field when it contains a delimiter, quote, or newline.
fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Human-readable compliance report for one document.
pub fn render_markdown(analysis: &DocumentAnalysis) -> String {
    let mut out = String::new();
    out.push_str("# ADGM Compliance Analysis Report\n\n");
    out.push_str(&format!("**Document Type:** {}\n", analysis.document_type));
    out.push_str(&format!(
        "**Overall Severity:** {}\n",
        analysis.overall_severity
    ));
    out.push_str(&format!(
        "**Total Issues Found:** {}\n\n",
        analysis.total_issues
    ));

    out.push_str("## Summary\n");
    for (label, count) in analysis.summary.entries() {
        if count > 0 {
            out.push_str(&format!("- {label}: {count}\n"));
        }
    }

    out.push_str("\n## Detailed Issues\n");
    for issue in &analysis.issues {
        out.push_str(&format!("\n### {}\n", issue.category.title()));
        out.push_str(&format!("- **Severity:** {}\n", issue.severity));
        out.push_str(&format!("- **Description:** {}\n", issue.description));
        out.push_str(&format!("- **Suggestion:** {}\n", issue.suggestion));
        out.push_str(&format!("- **ADGM Reference:** {}\n", issue.reference));
    }

    out
}
