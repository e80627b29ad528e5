//! Small-chunk consolidation.

use chunkmill_core::Chunk;
use tracing::debug;

use crate::tokenizer::Tokenizer;

/// Coalesce undersized neighbors in a single left-to-right pass.
///
/// A chunk below `min_size` tokens is merged with its immediate successor
/// (single-space join, recomputed counts, fresh id, `{strategy}_merged` tag,
/// earlier chunk's index and provenance) and the pair is consumed. The pass
/// is one-shot: a merged chunk is never re-evaluated, so a chain of three
/// undersized chunks leaves the third unmerged. An undersized final chunk
/// with no partner is kept as-is. Indices are not renumbered.
pub fn merge_small(tokenizer: &Tokenizer, chunks: Vec<Chunk>, min_size: usize) -> Vec<Chunk> {
    let input_len = chunks.len();
    let mut merged = Vec::with_capacity(input_len);

    let mut iter = chunks.into_iter();
    while let Some(current) = iter.next() {
        if current.token_count >= min_size {
            merged.push(current);
            continue;
        }
        match iter.next() {
            Some(next) => {
                let token_count =
                    tokenizer.count(&format!("{} {}", current.text, next.text));
                merged.push(current.merge_with(next, token_count));
            }
            // Last chunk is small; keep it anyway.
            None => merged.push(current),
        }
    }

    debug!(input = input_len, output = merged.len(), min_size, "merged small chunks");
    merged
}
