//! Keyword-table citation annotator.
//!
//! Scans answer text for a declared-order table of trigger keywords and
//! collects one hyperlink fragment per matching rule. Rendering is a pure
//! function over the original text plus the collected fragments, so it can
//! be called any number of times without compounding output.
//!
//! # Matching modes
//!
//! - Lax (default): case-sensitive literal substring anywhere in the text,
//!   including inside longer words ("Articles" triggers "Article").
//! - Strict: the keyword must occur as a whole word, i.e. not flanked by
//!   ASCII alphanumerics on either side. Still case-sensitive.

use tracing::debug;

/// A citation rule: trigger keyword plus the fixed label/URL of the
/// fragment it emits.
///
/// Rules fire at most once per input, in declared table order, and are
/// independent of each other.
#[derive(Debug, Clone, Copy)]
pub struct CitationRule {
    pub keyword: &'static str,
    pub label: &'static str,
    pub url: &'static str,
}

/// Default rule table. Order is significant: fragments are appended in
/// this order when multiple keywords match the same input.
pub const DEFAULT_RULES: &[CitationRule] = &[
    CitationRule {
        keyword: "Article",
        label: "Article 123",
        url: "https://example.com/article-123",
    },
    CitationRule {
        keyword: "Law",
        label: "Law 456",
        url: "https://example.com/law-456",
    },
];

/// A text body with an ordered list of hyperlink annotation fragments.
///
/// `content` is fixed at construction; annotations accumulate separately
/// and are only combined with the content by [`render`](Self::render).
#[derive(Debug, Clone)]
pub struct Document {
    content: String,
    annotations: Vec<String>,
}

impl Document {
    /// Create a document with no annotations. Any text is accepted,
    /// including the empty string.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            annotations: Vec::new(),
        }
    }

    /// Append a hyperlink fragment for the given label and target URL.
    ///
    /// Fragments open in a new tab and are kept in insertion order;
    /// duplicates are permitted.
    pub fn add_annotation(&mut self, label: &str, url: &str) {
        self.annotations
            .push(format!("<a href=\"{url}\" target=\"_blank\">{label}</a>"));
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn annotations(&self) -> &[String] {
        &self.annotations
    }

    /// Render the annotated text: original content followed by each
    /// fragment on its own line, in insertion order.
    ///
    /// Pure with respect to the document, so calling it twice returns
    /// identical strings.
    pub fn render(&self) -> String {
        let mut out = self.content.clone();
        for annotation in &self.annotations {
            out.push('\n');
            out.push_str(annotation);
        }
        out
    }
}

/// Citation annotator over a fixed rule table.
pub struct Annotator {
    rules: &'static [CitationRule],
    strict: bool,
}

impl Annotator {
    /// Annotator with the default rule table and lax substring matching.
    pub fn new() -> Self {
        Self {
            rules: DEFAULT_RULES,
            strict: false,
        }
    }

    /// Require whole-word keyword occurrences instead of raw substrings.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Scan `text` against the rule table and return a document carrying
    /// one fragment per matching rule, in table order.
    ///
    /// Never fails; text with no matches yields a document with zero
    /// annotations.
    pub fn annotate(&self, text: &str) -> Document {
        let mut document = Document::new(text);
        for rule in self.rules {
            let hit = if self.strict {
                contains_word(text, rule.keyword)
            } else {
                text.contains(rule.keyword)
            };
            if hit {
                debug!(keyword = rule.keyword, "citation keyword matched");
                document.add_annotation(rule.label, rule.url);
            }
        }
        document
    }
}

impl Default for Annotator {
    fn default() -> Self {
        Self::new()
    }
}

/// Whole-word occurrence check: `needle` must appear in `haystack` with no
/// ASCII alphanumeric immediately before or after it. Case-sensitive.
fn contains_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    let bytes = haystack.as_bytes();
    let mut start = 0;
    while let Some(pos) = haystack[start..].find(needle) {
        let at = start + pos;
        let end = at + needle.len();
        let bounded_left = at == 0 || !bytes[at - 1].is_ascii_alphanumeric();
        let bounded_right = end == bytes.len() || !bytes[end].is_ascii_alphanumeric();
        if bounded_left && bounded_right {
            return true;
        }
        start = at + 1;
    }
    false
}
