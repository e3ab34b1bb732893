//! Regex patterns and static rule tables for red-flag detection
//!
//! All regexes are compiled once at first use. Tables are immutable for the
//! life of the process; rule modules and the checker borrow them read-only.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// References to UAE federal jurisdiction where ADGM is expected
    pub static ref JURISDICTION_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)UAE\s+Federal\s+Courts?").unwrap(),
        Regex::new(r"(?i)UAE\s+Federal\s+Law").unwrap(),
        Regex::new(r"(?i)Federal\s+Courts?\s+of\s+UAE").unwrap(),
        Regex::new(r"(?i)UAE\s+Commercial\s+Courts?").unwrap(),
        Regex::new(r"(?i)governing\s+law.*UAE").unwrap(),
        Regex::new(r"(?i)jurisdiction.*UAE\s+Federal").unwrap(),
    ];

    /// Hedging language that weakens binding force
    pub static ref HEDGING_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)may\s+or\s+may\s+not").unwrap(),
        Regex::new(r"(?i)subject\s+to\s+approval").unwrap(),
        Regex::new(r"(?i)as\s+deemed\s+appropriate").unwrap(),
        Regex::new(r"(?i)reasonable\s+discretion").unwrap(),
        Regex::new(r"(?i)best\s+efforts").unwrap(),
        Regex::new(r"(?i)commercially\s+reasonable").unwrap(),
    ];

    /// Indicators that an execution/signature section exists
    pub static ref SIGNATURE_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)signature\s+block").unwrap(),
        Regex::new(r"(?i)executed\s+by").unwrap(),
        Regex::new(r"(?i)signed\s+by").unwrap(),
        Regex::new(r"(?i)authorized\s+signatory").unwrap(),
        Regex::new(r"(?i)witness\s+signature").unwrap(),
    ];

    /// Placeholder/unfinished-content markers
    pub static ref PLACEHOLDER_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)TBD").unwrap(),
        Regex::new(r"(?i)to\s+be\s+determined").unwrap(),
        Regex::new(r"(?i)to\s+be\s+agreed").unwrap(),
        Regex::new(r"(?i)placeholder").unwrap(),
        Regex::new(r"\[.*\]").unwrap(),
        Regex::new(r"___+").unwrap(),
    ];

    /// Corporate structures disallowed under ADGM rules
    pub static ref STRUCTURE_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)bearer\s+shares").unwrap(),
        Regex::new(r"(?i)nominee\s+director").unwrap(),
        Regex::new(r"(?i)trust\s+structure").unwrap(),
        Regex::new(r"(?i)offshore\s+company").unwrap(),
        Regex::new(r"(?i)tax\s+haven").unwrap(),
    ];

    /// Numbered-clause marker, e.g. "4.", used by the formatting check
    pub static ref NUMBERED_CLAUSE_PATTERN: Regex = Regex::new(r"\d+\.").unwrap();
}

/// Required clause keywords per document type, in display casing (matching
/// is case-insensitive). Types absent from this table skip the
/// missing-clause check entirely.
pub const REQUIRED_CLAUSES: &[(&str, &[&str])] = &[
    (
        "Articles of Association",
        &[
            "ADGM jurisdiction",
            "company objects",
            "share capital structure",
            "director appointment",
            "shareholder rights",
            "registered office",
        ],
    ),
    (
        "Memorandum of Association",
        &[
            "company name",
            "registered office",
            "objects clause",
            "liability of members",
            "capital structure",
        ],
    ),
    (
        "Board Resolution",
        &[
            "meeting date",
            "directors present",
            "resolution text",
            "voting results",
            "signature blocks",
        ],
    ),
    (
        "UBO Declaration",
        &[
            "beneficial owner details",
            "ownership percentages",
            "control structures",
            "declaration statements",
            "supporting documentation",
        ],
    ),
];

/// Look up the required clause list for a document type.
pub fn required_clauses_for(document_type: &str) -> Option<&'static [&'static str]> {
    REQUIRED_CLAUSES
        .iter()
        .find(|(doc_type, _)| *doc_type == document_type)
        .map(|(_, clauses)| *clauses)
}
