//! Heading-based section extraction
//!
//! Best-effort heuristics over common legal document layouts. Each pattern
//! is scanned independently: a heading's content runs from the end of its
//! match to the start of the next match of the *same* pattern (or end of
//! text). When patterns overlap, later patterns overwrite earlier ones on
//! key collision (last-pattern-wins). That overlap is a known limitation of
//! the heuristic and is left visible rather than silently resolved.

use std::collections::HashMap;
use std::ops::Range;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Heading shapes, in application order:
    /// 1. ALL-CAPS line, optionally "CLAUSE/SECTION/ARTICLE" + number
    /// 2. numbered-list heading "N. Title"
    /// 3. ALL-CAPS conjunction heading ("X AND Y", "X OF Y")
    static ref SECTION_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?:^|\n)([A-Z][A-Z\s]+(?:CLAUSE|SECTION|ARTICLE)?\s*\d*[.:]?)\s*\n").unwrap(),
        Regex::new(r"(?:^|\n)(\d+\.\s*[A-Z][^.\n]+)").unwrap(),
        Regex::new(r"(?:^|\n)([A-Z][A-Z\s]+(?:AND|OR|OF)\s+[A-Z\s]+)").unwrap(),
    ];
}

/// All candidate headings for one pattern: (trimmed title, full match span).
pub fn scan_headings(pattern: &Regex, text: &str) -> Vec<(String, Range<usize>)> {
    pattern
        .captures_iter(text)
        .filter_map(|caps| {
            let full = caps.get(0)?;
            let title = caps.get(1)?.as_str().trim();
            if title.is_empty() {
                return None;
            }
            Some((title.to_string(), full.start()..full.end()))
        })
        .collect()
}

/// Split text into heading → content spans.
///
/// Empty text yields an empty map; there are no failure modes.
pub fn extract_sections(text: &str) -> HashMap<String, String> {
    let mut sections = HashMap::new();

    for pattern in SECTION_PATTERNS.iter() {
        let headings = scan_headings(pattern, text);
        for (index, (title, span)) in headings.iter().enumerate() {
            let content_end = headings
                .get(index + 1)
                .map(|(_, next)| next.start)
                .unwrap_or(text.len());
            let content = text[span.end..content_end].trim();
            if !content.is_empty() {
                sections.insert(title.clone(), content.to_string());
            }
        }
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_all_caps_headings() {
        let text = "SHARE CAPITAL\nThe share capital of the company is USD 50,000.\n\
                    REGISTERED OFFICE\nThe registered office is at Al Maryah Island.\n";
        let sections = extract_sections(text);
        assert!(sections["SHARE CAPITAL"].contains("USD 50,000"));
        assert!(sections["REGISTERED OFFICE"].contains("Al Maryah Island"));
    }

    #[test]
    fn extracts_numbered_headings() {
        let text = "1. Definitions\nIn these articles the following terms apply\n\
                    2. Objects\nThe objects of the company are unrestricted\n";
        let sections = extract_sections(text);
        let key = sections
            .keys()
            .find(|k| k.contains("Definitions"))
            .expect("numbered heading captured");
        assert!(sections[key].contains("following terms"));
    }

    #[test]
    fn content_runs_to_next_heading_of_same_pattern() {
        let text = "OBJECTS\nfirst body\nSHARE CAPITAL\nsecond body\n";
        let sections = extract_sections(text);
        assert!(sections["OBJECTS"].contains("first body"));
        assert!(!sections["OBJECTS"].contains("second body"));
    }

    #[test]
    fn empty_text_yields_empty_map() {
        assert!(extract_sections("").is_empty());
    }

    #[test]
    fn plain_prose_yields_no_sections() {
        let sections = extract_sections("just some lowercase prose without headings");
        assert!(sections.is_empty());
    }

    #[test]
    fn scan_headings_reports_spans() {
        let headings = scan_headings(&SECTION_PATTERNS[0], "PREAMBLE\nbody text\n");
        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].0, "PREAMBLE");
        assert_eq!(headings[0].1.start, 0);
    }
}
