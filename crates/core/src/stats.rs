//! Aggregate statistics over a chunk sequence.

use serde::{Deserialize, Serialize};

use crate::chunk::Chunk;

/// Totals, averages (rounded to 2 decimal places) and token extremes for a
/// chunk list. All fields are zero for an empty input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChunkStats {
    pub total_chunks: usize,
    pub total_tokens: usize,
    pub total_characters: usize,
    pub total_words: usize,
    pub avg_tokens_per_chunk: f64,
    pub avg_chars_per_chunk: f64,
    pub avg_words_per_chunk: f64,
    pub min_tokens: usize,
    pub max_tokens: usize,
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

impl ChunkStats {
    pub fn from_chunks(chunks: &[Chunk]) -> Self {
        if chunks.is_empty() {
            return Self::default();
        }

        let total_chunks = chunks.len();
        let total_tokens: usize = chunks.iter().map(|c| c.token_count).sum();
        let total_characters: usize = chunks.iter().map(|c| c.character_count).sum();
        let total_words: usize = chunks.iter().map(|c| c.word_count).sum();
        let n = total_chunks as f64;

        Self {
            total_chunks,
            total_tokens,
            total_characters,
            total_words,
            avg_tokens_per_chunk: round2(total_tokens as f64 / n),
            avg_chars_per_chunk: round2(total_characters as f64 / n),
            avg_words_per_chunk: round2(total_words as f64 / n),
            min_tokens: chunks.iter().map(|c| c.token_count).min().unwrap_or(0),
            max_tokens: chunks.iter().map(|c| c.token_count).max().unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunk::ChunkStrategy;

    fn chunk(text: &str, tokens: usize) -> Chunk {
        Chunk::new(text.to_string(), 0, "t.pdf", Some(1), ChunkStrategy::Tokens, tokens)
    }

    #[test]
    fn empty_input_is_all_zero() {
        let stats = ChunkStats::from_chunks(&[]);
        assert_eq!(stats, ChunkStats::default());
        assert_eq!(stats.total_chunks, 0);
        assert_eq!(stats.min_tokens, 0);
        assert_eq!(stats.avg_tokens_per_chunk, 0.0);
    }

    #[test]
    fn totals_and_extremes() {
        let chunks = vec![chunk("a b", 30), chunk("c d", 40), chunk("e f", 500)];
        let stats = ChunkStats::from_chunks(&chunks);
        assert_eq!(stats.total_chunks, 3);
        assert_eq!(stats.total_tokens, 570);
        assert_eq!(stats.total_words, 6);
        assert_eq!(stats.min_tokens, 30);
        assert_eq!(stats.max_tokens, 500);
        assert_eq!(stats.avg_tokens_per_chunk, 190.0);
    }

    #[test]
    fn averages_round_to_two_decimals() {
        let chunks = vec![chunk("x", 10), chunk("y", 15), chunk("z", 9)];
        let stats = ChunkStats::from_chunks(&chunks);
        // 34 / 3 = 11.333...
        assert_eq!(stats.avg_tokens_per_chunk, 11.33);
    }
}
