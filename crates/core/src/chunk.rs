//! Chunk output type and strategy tags.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ── Strategy tags ───────────────────────────────────────────────────

/// Which splitting algorithm to run on the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitStrategy {
    /// Fixed-size overlapping token windows.
    Tokens,
    /// Sentence-preserving packing (default for document chunking).
    Sentences,
}

/// How a chunk was produced. Merged variants mark chunks created by the
/// small-chunk consolidation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkStrategy {
    Tokens,
    Sentences,
    TokensMerged,
    SentencesMerged,
}

impl From<SplitStrategy> for ChunkStrategy {
    fn from(s: SplitStrategy) -> Self {
        match s {
            SplitStrategy::Tokens => ChunkStrategy::Tokens,
            SplitStrategy::Sentences => ChunkStrategy::Sentences,
        }
    }
}

impl ChunkStrategy {
    /// The tag the merge pass stamps onto a consolidated chunk.
    pub fn merged(self) -> Self {
        match self {
            ChunkStrategy::Tokens | ChunkStrategy::TokensMerged => ChunkStrategy::TokensMerged,
            ChunkStrategy::Sentences | ChunkStrategy::SentencesMerged => {
                ChunkStrategy::SentencesMerged
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChunkStrategy::Tokens => "tokens",
            ChunkStrategy::Sentences => "sentences",
            ChunkStrategy::TokensMerged => "tokens_merged",
            ChunkStrategy::SentencesMerged => "sentences_merged",
        }
    }
}

impl std::fmt::Display for ChunkStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Chunk ───────────────────────────────────────────────────────────

/// A bounded span of document text with provenance and size metadata.
///
/// Serializes to the interchange record consumed by storage/indexing
/// collaborators (`chunk_id`, `chunk_index`, `chunking_strategy`, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    /// Globally unique id, assigned at creation and never reused.
    #[serde(rename = "chunk_id")]
    pub id: Uuid,
    /// Chunk text. Never empty or whitespace-only.
    pub text: String,
    /// 0-based position within one chunking call. Not renumbered by merging.
    #[serde(rename = "chunk_index")]
    pub index: usize,
    /// Opaque provenance label supplied by the caller.
    pub source_file: String,
    /// 1-based page number; `None` for page-less text blobs.
    pub page_number: Option<u32>,
    pub token_count: usize,
    pub character_count: usize,
    pub word_count: usize,
    #[serde(rename = "chunking_strategy")]
    pub strategy: ChunkStrategy,
}

impl Chunk {
    /// Build a chunk with a fresh id. Character and word counts are derived
    /// from `text`; the token count comes from the caller's tokenizer.
    pub fn new(
        text: String,
        index: usize,
        source_file: &str,
        page_number: Option<u32>,
        strategy: ChunkStrategy,
        token_count: usize,
    ) -> Self {
        let character_count = text.chars().count();
        let word_count = text.split_whitespace().count();
        Self {
            id: Uuid::new_v4(),
            text,
            index,
            source_file: source_file.to_string(),
            page_number,
            token_count,
            character_count,
            word_count,
            strategy,
        }
    }

    /// Consume two adjacent chunks and produce their consolidation: text
    /// joined by a single space, fresh id, recomputed counts, `index` and
    /// provenance inherited from `self` (the earlier chunk).
    pub fn merge_with(self, next: Chunk, token_count: usize) -> Chunk {
        let text = format!("{} {}", self.text, next.text);
        Chunk::new(
            text,
            self.index,
            &self.source_file,
            self.page_number,
            self.strategy.merged(),
            token_count,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_counts() {
        let c = Chunk::new(
            "hello wide world".to_string(),
            0,
            "a.pdf",
            Some(1),
            ChunkStrategy::Sentences,
            3,
        );
        assert_eq!(c.character_count, 16);
        assert_eq!(c.word_count, 3);
        assert_eq!(c.token_count, 3);
    }

    #[test]
    fn merge_inherits_earlier_metadata() {
        let a = Chunk::new("one".into(), 4, "f.pdf", Some(2), ChunkStrategy::Sentences, 1);
        let b = Chunk::new("two".into(), 5, "f.pdf", Some(2), ChunkStrategy::Sentences, 1);
        let a_id = a.id;
        let b_id = b.id;
        let m = a.merge_with(b, 2);
        assert_eq!(m.text, "one two");
        assert_eq!(m.index, 4);
        assert_eq!(m.page_number, Some(2));
        assert_eq!(m.strategy, ChunkStrategy::SentencesMerged);
        assert_ne!(m.id, a_id);
        assert_ne!(m.id, b_id);
    }

    #[test]
    fn merged_tag_is_stable() {
        assert_eq!(ChunkStrategy::Tokens.merged(), ChunkStrategy::TokensMerged);
        assert_eq!(ChunkStrategy::TokensMerged.merged(), ChunkStrategy::TokensMerged);
        assert_eq!(ChunkStrategy::Sentences.merged(), ChunkStrategy::SentencesMerged);
    }

    #[test]
    fn interchange_field_names() {
        let c = Chunk::new(
            "some text".to_string(),
            1,
            "doc.pdf",
            None,
            ChunkStrategy::Tokens,
            2,
        );
        let v = serde_json::to_value(&c).unwrap();
        assert!(v.get("chunk_id").is_some());
        assert_eq!(v["chunk_index"], 1);
        assert_eq!(v["source_file"], "doc.pdf");
        assert_eq!(v["page_number"], serde_json::Value::Null);
        assert_eq!(v["chunking_strategy"], "tokens");
        assert_eq!(v["token_count"], 2);
        assert_eq!(v["character_count"], 9);
        assert_eq!(v["word_count"], 2);
    }
}
