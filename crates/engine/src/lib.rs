//! Document segmentation engine.
//!
//! Converts extracted page text into bounded, overlapping, metadata-tagged
//! chunks suitable for retrieval or LLM consumption: token-window splitting,
//! sentence-preserving packing, adaptive sizing by document length, and
//! small-chunk consolidation. The engine consumes plain per-page text and a
//! page index; it knows nothing about files, HTTP, or UI state.

pub mod advisor;
pub mod chunker;
pub mod merge;
pub mod sentence;
pub mod tokenizer;
pub mod window;

pub use chunker::{Chunker, DocumentChunks};
pub use sentence::{PunctuationSplitter, SentenceSplit};
pub use tokenizer::Tokenizer;
