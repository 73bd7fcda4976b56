//! Content sources and the generative AI advisor.
//!
//! [`ContentExtractor`] turns a [`ContentSource`] (direct text, a local plain
//! text or markdown file, or a web page) into text plus headings ready for the
//! analysis engine. [`AiAdvisor`] forwards content to an OpenAI-compatible
//! chat-completions endpoint and never fails: problems come back as text.

pub mod ai;
pub mod error;
pub mod extractor;
pub mod html;
pub mod markdown;

pub use ai::AiAdvisor;
pub use error::ExtractError;
pub use extractor::{ContentExtractor, ContentSource, ExtractedContent, ExtractionOutcome};
