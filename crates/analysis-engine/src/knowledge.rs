//! Lexical retrieval over the built-in ADGM reference corpus
//!
//! A small TF-IDF index over chunked regulatory reference text. Retrieval
//! is pure cosine ranking; no network, no I/O. Callers feed the top chunks
//! to whatever downstream consumer needs grounding text (display, prompt
//! assembly by an external collaborator, etc.).

use std::collections::HashMap;

/// One reference document in the built-in corpus.
pub struct KnowledgeEntry {
    pub source: &'static str,
    pub kind: &'static str,
    pub content: &'static str,
}

/// A chunk of a reference document, carrying its origin metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeChunk {
    pub source: &'static str,
    pub kind: &'static str,
    pub text: String,
}

/// Built-in ADGM reference corpus.
pub const KNOWLEDGE_BASE: &[KnowledgeEntry] = &[
    KnowledgeEntry {
        source: "ADGM Companies Regulations 2020",
        kind: "regulation",
        content: "ADGM Companies Regulations 2020 - Key Provisions. \
            Article 6: Company Formation. Companies must be incorporated under \
            ADGM regulations. Articles of Association must specify ADGM \
            jurisdiction. Memorandum of Association must include company objects. \
            Article 12: Share Capital. Minimum share capital requirements. Share \
            capital must be specified in Articles. Shares must be fully paid up. \
            Article 15: Directors. Minimum one director required. Directors must \
            be natural persons. Register of directors must be maintained. \
            Article 18: Shareholders. Register of members must be maintained. \
            UBO declarations required. Shareholder rights and obligations. \
            Article 25: Registered Office. Must have registered office in ADGM. \
            Address change notifications required. Physical presence requirements.",
    },
    KnowledgeEntry {
        source: "ADGM Licensing Guide",
        kind: "licensing",
        content: "ADGM Licensing Requirements. Financial Services Permission: \
            application form with detailed business plan, fit and proper person \
            assessments, capital adequacy requirements, compliance framework \
            documentation. Commercial License: business activity description, \
            shareholder and director details, financial projections, compliance \
            policies. Employment Regulations: standard employment contracts, work \
            permit requirements, labor law compliance, employee benefits structure.",
    },
    KnowledgeEntry {
        source: "Legal Compliance Guide",
        kind: "compliance",
        content: "Common Legal Issues in ADGM Documents. Jurisdiction Issues: \
            references to UAE Federal Courts instead of ADGM, incorrect governing \
            law clauses, missing ADGM-specific provisions. Compliance Issues: \
            missing UBO declarations, incomplete director information, \
            insufficient share capital details, missing compliance policies. \
            Structural Issues: ambiguous language in clauses, missing essential \
            sections, incorrect formatting, non-binding provisions. Red Flags: \
            references to other jurisdictions, missing signature blocks, \
            incomplete corporate information, non-compliant share structures.",
    },
    KnowledgeEntry {
        source: "ADGM Templates",
        kind: "template",
        content: "ADGM Document Templates and Standards. Articles of Association \
            template: company name and registered office, objects clause with \
            ADGM jurisdiction, share capital structure, director appointment \
            procedures, shareholder rights and meetings. Memorandum of \
            Association template: company name and type, registered office \
            address, objects and powers, liability of members, capital structure. \
            Board Resolution template: meeting date and location, directors \
            present, resolution text, voting results, signature blocks. UBO \
            Declaration template: ultimate beneficial owner details, ownership \
            percentages, control structures, declaration statements, supporting \
            documentation.",
    },
];

/// Chunk size in characters.
const CHUNK_SIZE: usize = 1000;
/// Character overlap carried between consecutive chunks.
const CHUNK_OVERLAP: usize = 200;
/// Vocabulary cap, most frequent terms first.
const MAX_FEATURES: usize = 1000;

/// Terms excluded from the vocabulary.
const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "been", "but", "by", "for",
    "from", "has", "have", "in", "into", "is", "it", "its", "must", "no",
    "not", "of", "on", "or", "other", "our", "shall", "such", "than", "that",
    "the", "their", "them", "then", "there", "these", "they", "this", "to",
    "under", "was", "were", "which", "will", "with",
];

/// Split text into whitespace-aligned character windows with overlap.
pub fn chunk_text(text: &str, size: usize, overlap: usize) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return Vec::new();
    }

    let mut chunks = Vec::new();
    let mut start = 0;
    while start < words.len() {
        let mut end = start;
        let mut length = 0;
        while end < words.len() && length + words[end].len() + 1 <= size {
            length += words[end].len() + 1;
            end += 1;
        }
        if end == start {
            // Single word longer than the window; emit it whole.
            end = start + 1;
        }
        chunks.push(words[start..end].join(" "));
        if end >= words.len() {
            break;
        }

        // Walk back far enough to carry ~overlap characters of context.
        let mut carry = end;
        let mut carried = 0;
        while carry > start + 1 && carried + words[carry - 1].len() + 1 <= overlap {
            carried += words[carry - 1].len() + 1;
            carry -= 1;
        }
        start = carry;
    }

    chunks
}

/// TF-IDF index over the chunked corpus.
pub struct TfidfIndex {
    vocab: HashMap<String, usize>,
    idf: Vec<f32>,
    vectors: Vec<Vec<f32>>,
    chunks: Vec<KnowledgeChunk>,
}

impl TfidfIndex {
    /// Index the built-in corpus.
    pub fn build() -> Self {
        let chunks = KNOWLEDGE_BASE
            .iter()
            .flat_map(|entry| {
                chunk_text(entry.content, CHUNK_SIZE, CHUNK_OVERLAP)
                    .into_iter()
                    .map(|text| KnowledgeChunk {
                        source: entry.source,
                        kind: entry.kind,
                        text,
                    })
            })
            .collect();
        Self::from_chunks(chunks)
    }

    /// Index an arbitrary chunk set.
    pub fn from_chunks(chunks: Vec<KnowledgeChunk>) -> Self {
        let tokenized: Vec<Vec<String>> =
            chunks.iter().map(|chunk| tokenize(&chunk.text)).collect();

        // Document frequency per term.
        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        for tokens in &tokenized {
            let mut seen: Vec<&str> = tokens.iter().map(String::as_str).collect();
            seen.sort_unstable();
            seen.dedup();
            for term in seen {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        // Vocabulary capped to the most frequent terms, ties alphabetical.
        let mut terms: Vec<(&str, usize)> =
            doc_freq.iter().map(|(term, freq)| (*term, *freq)).collect();
        terms.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        terms.truncate(MAX_FEATURES);

        let vocab: HashMap<String, usize> = terms
            .iter()
            .enumerate()
            .map(|(index, (term, _))| (term.to_string(), index))
            .collect();

        let total_docs = chunks.len().max(1) as f32;
        let mut idf = vec![0.0; vocab.len()];
        for (term, index) in &vocab {
            let freq = doc_freq[term.as_str()] as f32;
            idf[*index] = ((1.0 + total_docs) / (1.0 + freq)).ln() + 1.0;
        }

        let vectors = tokenized
            .iter()
            .map(|tokens| vectorize(tokens, &vocab, &idf))
            .collect();

        TfidfIndex {
            vocab,
            idf,
            vectors,
            chunks,
        }
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Top-k chunks by cosine similarity, descending; ties keep index order.
    /// A query sharing no vocabulary with the corpus returns nothing.
    pub fn retrieve(&self, query: &str, k: usize) -> Vec<&KnowledgeChunk> {
        let tokens = tokenize(query);
        let query_vector = vectorize(&tokens, &self.vocab, &self.idf);
        if query_vector.iter().all(|weight| *weight == 0.0) {
            return Vec::new();
        }

        let mut scored: Vec<(usize, f32)> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(index, vector)| (index, dot(&query_vector, vector)))
            .collect();
        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });

        scored
            .into_iter()
            .take(k)
            .map(|(index, _)| &self.chunks[index])
            .collect()
    }
}

/// Lowercase alphanumeric tokens of length >= 2, stop words removed.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.len() >= 2 && !STOP_WORDS.contains(token))
        .map(|token| token.to_string())
        .collect()
}

/// L2-normalized tf-idf vector over the index vocabulary.
fn vectorize(tokens: &[String], vocab: &HashMap<String, usize>, idf: &[f32]) -> Vec<f32> {
    let mut vector = vec![0.0f32; vocab.len()];
    for token in tokens {
        if let Some(&index) = vocab.get(token) {
            vector[index] += 1.0;
        }
    }
    for (index, weight) in vector.iter_mut().enumerate() {
        *weight *= idf[index];
    }

    let norm: f32 = vector.iter().map(|w| w * w).sum::<f32>().sqrt();
    if norm > 0.0 {
        for weight in &mut vector {
            *weight /= norm;
        }
    }
    vector
}

fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jurisdiction_query_ranks_compliance_guide_first() {
        let index = TfidfIndex::build();
        let results = index.retrieve("UAE Federal Courts jurisdiction governing law", 3);
        assert!(!results.is_empty());
        assert_eq!(results[0].source, "Legal Compliance Guide");
    }

    #[test]
    fn licensing_query_finds_licensing_guide() {
        let index = TfidfIndex::build();
        let results = index.retrieve("financial services permission license", 2);
        assert!(results
            .iter()
            .any(|chunk| chunk.source == "ADGM Licensing Guide"));
    }

    #[test]
    fn empty_query_returns_nothing() {
        let index = TfidfIndex::build();
        assert!(index.retrieve("", 5).is_empty());
        assert!(index.retrieve("zzzzqqq xyzzy", 5).is_empty());
    }

    #[test]
    fn k_caps_result_count() {
        let index = TfidfIndex::build();
        let results = index.retrieve("ADGM", 1);
        assert!(results.len() <= 1);
    }

    #[test]
    fn chunking_respects_window_size() {
        let text = "word ".repeat(600);
        let chunks = chunk_text(&text, 1000, 200);
        assert!(chunks.len() > 1);
        assert!(chunks.iter().all(|chunk| chunk.len() <= 1000));
    }

    #[test]
    fn consecutive_chunks_share_overlap() {
        let text = (0..400).map(|n| format!("tok{n}")).collect::<Vec<_>>().join(" ");
        let chunks = chunk_text(&text, 500, 100);
        assert!(chunks.len() > 1);
        let first_tail: Vec<&str> = chunks[0].split_whitespace().rev().take(3).collect();
        for token in first_tail {
            assert!(chunks[1].contains(token));
        }
    }

    #[test]
    fn empty_text_has_no_chunks() {
        assert!(chunk_text("", 1000, 200).is_empty());
    }

    #[test]
    fn retrieval_is_deterministic() {
        let index = TfidfIndex::build();
        let first: Vec<String> = index
            .retrieve("share capital directors", 4)
            .iter()
            .map(|chunk| chunk.text.clone())
            .collect();
        let second: Vec<String> = index
            .retrieve("share capital directors", 4)
            .iter()
            .map(|chunk| chunk.text.clone())
            .collect();
        assert_eq!(first, second);
    }
}
