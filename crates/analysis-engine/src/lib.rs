pub mod annotate;
pub mod classifier;
pub mod knowledge;
pub mod patterns;
pub mod process;
pub mod report;
pub mod rules;
pub mod sections;

use shared_types::{BatchAnalysis, DocumentResult, Report, SourceDocument};

use crate::classifier::Classifier;
use crate::rules::RedFlagChecker;

/// Text extraction collaborator. Implementations own all I/O and format
/// handling; the engine treats the returned text as opaque.
pub trait TextSource {
    fn extract_text(&self, path: &str) -> anyhow::Result<String>;
}

/// Failures at the collaborator boundary. The analysis core itself is total
/// and never produces these.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("failed to extract text from {path}")]
    Extraction {
        path: String,
        #[source]
        source: anyhow::Error,
    },
}

/// CorporateAgent entry point: classification, red-flag analysis, and
/// batch-level process detection over uploaded documents.
pub struct CorporateAgent {
    classifier: Classifier,
    checker: RedFlagChecker,
}

impl CorporateAgent {
    pub fn new() -> Self {
        CorporateAgent {
            classifier: Classifier::new(),
            checker: RedFlagChecker::new(),
        }
    }

    /// Per-document pipeline: classify, then run every red-flag rule.
    /// Pure and independent per document; safe to call concurrently.
    pub fn analyze_document(&self, name: &str, text: &str) -> DocumentResult {
        let classification = self.classifier.classify(text);
        let analysis = self
            .checker
            .analyze(text, &classification.document_type);

        tracing::debug!(
            document = name,
            document_type = %classification.document_type,
            confidence = classification.confidence,
            issues = analysis.total_issues,
            "document analyzed"
        );

        DocumentResult {
            file_name: name.to_string(),
            document_type: classification.document_type,
            confidence: classification.confidence,
            word_count: text.split_whitespace().count(),
            analysis,
        }
    }

    /// Analyze a batch, then infer the legal process from the classified
    /// types. Process detection is the join point and runs only after every
    /// document result is available; an empty batch has no detection.
    pub fn process_batch(&self, documents: &[SourceDocument]) -> BatchAnalysis {
        let results: Vec<DocumentResult> = documents
            .iter()
            .map(|doc| self.analyze_document(&doc.name, &doc.text))
            .collect();

        let detection = if results.is_empty() {
            None
        } else {
            let types: Vec<String> = results
                .iter()
                .map(|result| result.document_type.clone())
                .collect();
            Some(process::detect(&types))
        };

        if let Some(detection) = &detection {
            tracing::info!(
                documents = results.len(),
                process = %detection.process,
                missing = detection.missing.len(),
                "batch analyzed"
            );
        }

        BatchAnalysis {
            documents: results,
            detection,
            checked_at: chrono::Utc::now().timestamp() as u64,
        }
    }

    /// Drive the extraction collaborator over a set of paths. A document
    /// that fails extraction is skipped, not fatal: the batch continues and
    /// the failure is reported alongside the results.
    pub fn process_sources<S: TextSource>(
        &self,
        source: &S,
        paths: &[String],
    ) -> (BatchAnalysis, Vec<PipelineError>) {
        let mut documents = Vec::new();
        let mut errors = Vec::new();

        for path in paths {
            match source.extract_text(path) {
                Ok(text) => documents.push(SourceDocument::new(path.clone(), text)),
                Err(err) => {
                    tracing::warn!(path = %path, error = %err, "extraction failed, skipping");
                    errors.push(PipelineError::Extraction {
                        path: path.clone(),
                        source: err,
                    });
                }
            }
        }

        (self.process_batch(&documents), errors)
    }

    /// Structured report over a completed batch.
    pub fn build_report(&self, batch: &BatchAnalysis) -> Report {
        report::from_batch(batch)
    }
}

impl Default for CorporateAgent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::Severity;

    struct StubSource;

    impl TextSource for StubSource {
        fn extract_text(&self, path: &str) -> anyhow::Result<String> {
            if path.ends_with("broken.docx") {
                anyhow::bail!("corrupt archive");
            }
            Ok(format!("Board resolution text for {path}"))
        }
    }

    #[test]
    fn analyze_document_classifies_and_checks() {
        let agent = CorporateAgent::new();
        let result = agent.analyze_document(
            "resolution.docx",
            "Board resolution of the directors meeting, governed by UAE Federal Courts.",
        );

        assert_eq!(result.document_type, "Board Resolution");
        assert!(result.analysis.summary.jurisdiction_issues >= 1);
        assert_eq!(result.analysis.overall_severity, Severity::High);
        assert_eq!(result.word_count, 11);
    }

    #[test]
    fn empty_batch_has_no_detection() {
        let agent = CorporateAgent::new();
        let batch = agent.process_batch(&[]);
        assert!(batch.documents.is_empty());
        assert!(batch.detection.is_none());
    }

    #[test]
    fn batch_detection_runs_after_all_documents() {
        let agent = CorporateAgent::new();
        let batch = agent.process_batch(&[
            SourceDocument::new("aoa.docx", "Articles of Association with share capital"),
            SourceDocument::new(
                "moa.docx",
                "Memorandum of Association stating the registered office",
            ),
        ]);

        let detection = batch.detection.expect("batch has detection");
        assert_eq!(detection.process, "Company Incorporation");
        assert_eq!(detection.uploaded_count, 2);
    }

    #[test]
    fn extraction_failures_skip_but_do_not_abort() {
        let agent = CorporateAgent::new();
        let paths = vec![
            "good.docx".to_string(),
            "broken.docx".to_string(),
            "fine.docx".to_string(),
        ];
        let (batch, errors) = agent.process_sources(&StubSource, &paths);

        assert_eq!(batch.documents.len(), 2);
        assert_eq!(errors.len(), 1);
        assert!(matches!(&errors[0], PipelineError::Extraction { path, .. }
            if path == "broken.docx"));
    }
}
