//! Legal process inference over a batch of classified documents
//!
//! Each classified document type votes for the processes it belongs to;
//! argmax wins, ties resolve to the first-declared process. The winning
//! process carries a fixed required-document checklist from which the
//! missing subset is computed.

use std::collections::HashSet;

use shared_types::ProcessDetection;

/// Which document types vote for which process, in declaration (tie-break)
/// order. A type may appear under more than one process.
const PROCESS_VOTES: &[(&str, &[&str])] = &[
    (
        "Company Incorporation",
        &[
            "Articles of Association",
            "Memorandum of Association",
            "Incorporation Application",
        ],
    ),
    ("Company Licensing", &["Licensing Application", "Compliance Policy"]),
    ("Employment Setup", &["Employment Contract"]),
    ("Commercial Agreement", &["Commercial Agreement"]),
];

/// Required document checklist per process.
const PROCESS_REQUIREMENTS: &[(&str, &[&str])] = &[
    (
        "Company Incorporation",
        &[
            "Articles of Association",
            "Memorandum of Association",
            "Incorporation Application",
            "UBO Declaration",
            "Register of Members and Directors",
        ],
    ),
    (
        "Company Licensing",
        &[
            "Licensing Application",
            "Articles of Association",
            "Memorandum of Association",
            "UBO Declaration",
            "Compliance Policy",
        ],
    ),
    (
        "Employment Setup",
        &["Employment Contract", "Board Resolution", "Compliance Policy"],
    ),
    (
        "Commercial Agreement",
        &["Commercial Agreement", "Board Resolution", "Shareholder Resolution"],
    ),
];

/// Infer the process from classified document types. Types not present in
/// the voting table contribute nothing; with no votes at all the
/// first-declared process wins, the same quirk as zero-confidence
/// classification. Callers see it; we do not special-case it.
pub fn detect_process(document_types: &[String]) -> &'static str {
    let mut best_process = PROCESS_VOTES[0].0;
    let mut best_votes = 0;

    for &(process, voters) in PROCESS_VOTES {
        let votes = document_types
            .iter()
            .filter(|doc_type| voters.contains(&doc_type.as_str()))
            .count();
        if votes > best_votes {
            best_process = process;
            best_votes = votes;
        }
    }

    best_process
}

/// Required document types for a process; unknown processes have none.
pub fn required_documents(process: &str) -> &'static [&'static str] {
    PROCESS_REQUIREMENTS
        .iter()
        .find(|(name, _)| *name == process)
        .map(|(_, required)| *required)
        .unwrap_or(&[])
}

/// Required types absent from the uploaded set, in required-list order.
pub fn missing_documents(required: &[&str], uploaded: &HashSet<&str>) -> Vec<String> {
    required
        .iter()
        .filter(|doc_type| !uploaded.contains(**doc_type))
        .map(|doc_type| doc_type.to_string())
        .collect()
}

/// Full detection: process, checklist, and missing subset for a batch.
pub fn detect(document_types: &[String]) -> ProcessDetection {
    let process = detect_process(document_types);
    let required = required_documents(process);
    let uploaded: HashSet<&str> = document_types.iter().map(String::as_str).collect();
    let missing = missing_documents(required, &uploaded);

    ProcessDetection {
        process: process.to_string(),
        required: required.iter().map(|s| s.to_string()).collect(),
        missing,
        uploaded_count: document_types.len(),
        required_count: required.len(),
    }
}
