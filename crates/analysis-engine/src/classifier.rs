//! Keyword-coverage document type classification
//!
//! Scores raw text against a static table of document-type keyword lists.
//! Confidence is the fraction of a type's keywords found anywhere in the
//! text (substring match, no word boundaries), so a keyword may match inside
//! a longer word. Ties, including the all-zero case, resolve to the type
//! declared first in the table; confidence 0 means "unclassified", never an
//! error.

use shared_types::Classification;

/// Ordered document-type keyword table. Keywords are stored lowercase.
pub type KeywordTable = &'static [(&'static str, &'static [&'static str])];

/// Registered ADGM document types, in tie-break order.
pub const DOCUMENT_TYPES: KeywordTable = &[
    (
        "Articles of Association",
        &[
            "articles of association",
            "articles",
            "aoa",
            "company constitution",
            "share capital",
            "shareholders",
            "directors",
            "objects clause",
        ],
    ),
    (
        "Memorandum of Association",
        &[
            "memorandum of association",
            "memorandum",
            "moa",
            "mou",
            "company name",
            "registered office",
            "objects",
        ],
    ),
    (
        "Board Resolution",
        &[
            "board resolution",
            "directors resolution",
            "board meeting",
            "directors meeting",
            "resolution of directors",
        ],
    ),
    (
        "Shareholder Resolution",
        &[
            "shareholder resolution",
            "shareholders resolution",
            "general meeting",
            "extraordinary general meeting",
            "egm",
            "agm",
        ],
    ),
    (
        "Incorporation Application",
        &[
            "incorporation application",
            "application for incorporation",
            "company registration",
            "registration application",
        ],
    ),
    (
        "UBO Declaration",
        &[
            "ubo declaration",
            "ultimate beneficial owner",
            "beneficial owner",
            "ownership declaration",
            "shareholder declaration",
        ],
    ),
    (
        "Register of Members and Directors",
        &[
            "register of members",
            "register of directors",
            "members register",
            "directors register",
            "shareholder register",
        ],
    ),
    (
        "Change of Registered Address",
        &[
            "change of address",
            "registered address",
            "address change",
            "change of registered office",
        ],
    ),
    (
        "Employment Contract",
        &[
            "employment contract",
            "employment agreement",
            "service agreement",
            "terms of employment",
            "employee contract",
        ],
    ),
    (
        "Licensing Application",
        &[
            "licensing application",
            "license application",
            "regulatory filing",
            "compliance filing",
            "regulatory application",
        ],
    ),
    (
        "Commercial Agreement",
        &[
            "commercial agreement",
            "commercial contract",
            "business agreement",
            "service agreement",
            "supply agreement",
        ],
    ),
    (
        "Compliance Policy",
        &[
            "compliance policy",
            "risk policy",
            "compliance framework",
            "risk management",
            "compliance manual",
        ],
    ),
];

/// Document type classifier over a fixed keyword table.
pub struct Classifier {
    table: KeywordTable,
}

impl Classifier {
    pub fn new() -> Self {
        Self::with_table(DOCUMENT_TYPES)
    }

    /// Use a custom table. The table must not contain empty keyword lists,
    /// or the type can never score above 0.
    pub fn with_table(table: KeywordTable) -> Self {
        Classifier { table }
    }

    /// Classify raw text, returning the best-scoring type.
    pub fn classify(&self, text: &str) -> Classification {
        let text_lower = text.to_lowercase();

        let mut best_type = "";
        let mut best_score = f32::NEG_INFINITY;
        for &(doc_type, keywords) in self.table {
            let score = keyword_coverage(&text_lower, keywords);
            if score > best_score {
                best_type = doc_type;
                best_score = score;
            }
        }

        Classification {
            document_type: best_type.to_string(),
            confidence: if best_score.is_finite() { best_score } else { 0.0 },
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Fraction of keywords occurring in the lowercased text.
fn keyword_coverage(text_lower: &str, keywords: &[&str]) -> f32 {
    if keywords.is_empty() {
        return 0.0;
    }
    let matched = keywords
        .iter()
        .filter(|keyword| text_lower.contains(*keyword))
        .count();
    matched as f32 / keywords.len() as f32
}
