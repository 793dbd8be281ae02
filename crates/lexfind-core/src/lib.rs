pub mod annotate;
pub mod session;
pub mod source;

pub use annotate::{Annotator, CitationRule, Document};
pub use session::{ChatSession, Message, Role};
pub use source::{SourceRef, dedup_sources, is_fallback_answer};
