//! Canonical source identity and citation dedup.
//!
//! The QA service cites sources as raw PDF filenames in which underscores
//! stand in for path separators (e.g. `Circolari_2024_Circolare-12.pdf` for
//! `Circolari/2024/Circolare-12`). The canonical identity of a source is its
//! **document id**: the filename with underscores mapped back to slashes and
//! the trailing `.pdf` stripped. All dedup and metadata lookups key on the
//! document id; the raw filename is kept only for display.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Answer the QA service returns when it found nothing to cite. Sources are
/// suppressed for this answer.
const FALLBACK_ANSWER: &str = "i don't know.";

/// A cited source document, identified canonically by `document_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRef {
    pub document_id: String,
    pub filename: String,
}

impl SourceRef {
    /// Derive the canonical document id from a raw citation filename.
    pub fn from_filename(filename: &str) -> Self {
        let stem = filename.strip_suffix(".pdf").unwrap_or(filename);
        Self {
            document_id: stem.replace('_', "/"),
            filename: filename.to_string(),
        }
    }
}

/// Deduplicate raw citation filenames by document id, preserving first-seen
/// order.
pub fn dedup_sources(raw: &[String]) -> Vec<SourceRef> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for filename in raw {
        let source = SourceRef::from_filename(filename);
        if seen.insert(source.document_id.clone()) {
            out.push(source);
        }
    }
    out
}

/// Whether an answer is the QA service's "I don't know." fallback, for
/// which no sources block is shown.
pub fn is_fallback_answer(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case(FALLBACK_ANSWER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_id_maps_underscores_and_strips_pdf() {
        let source = SourceRef::from_filename("Circolari_2024_Circolare-12.pdf");
        assert_eq!(source.document_id, "Circolari/2024/Circolare-12");
        assert_eq!(source.filename, "Circolari_2024_Circolare-12.pdf");
    }

    #[test]
    fn document_id_without_pdf_extension() {
        let source = SourceRef::from_filename("Risposte_2023_n45");
        assert_eq!(source.document_id, "Risposte/2023/n45");
    }

    #[test]
    fn only_trailing_pdf_is_stripped() {
        let source = SourceRef::from_filename("guide.pdf_notes.pdf");
        assert_eq!(source.document_id, "guide.pdf/notes");
    }

    #[test]
    fn dedup_keys_on_document_id_first_seen_order() {
        let raw = vec![
            "B_2024_1.pdf".to_string(),
            "A_2023_9.pdf".to_string(),
            "B_2024_1.pdf".to_string(),
            // Same document id as the first entry, different extension.
            "B_2024_1".to_string(),
        ];
        let sources = dedup_sources(&raw);
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].document_id, "B/2024/1");
        assert_eq!(sources[0].filename, "B_2024_1.pdf");
        assert_eq!(sources[1].document_id, "A/2023/9");
    }

    #[test]
    fn dedup_of_empty_list_is_empty() {
        assert!(dedup_sources(&[]).is_empty());
    }

    #[test]
    fn fallback_answer_detection() {
        assert!(is_fallback_answer("I don't know."));
        assert!(is_fallback_answer("  i DON'T know.  "));
        assert!(!is_fallback_answer("I don't know"));
        assert!(!is_fallback_answer("The rate is 22%."));
    }
}
