//! Fixed-size overlapping token-window splitting.

use chunkmill_core::{validate_window, ChunkError};
use tracing::debug;

use crate::tokenizer::Tokenizer;

/// Split `text` into windows of `size` tokens overlapping by `overlap`.
///
/// Windows advance by `size - overlap` tokens; the final window may be
/// shorter and is taken as-is. The underlying token ranges cover the whole
/// input, so chunk count is `ceil((N - overlap) / (size - overlap))` for
/// `N > overlap`, else 1 (empty input yields no chunks).
pub fn split(
    tokenizer: &Tokenizer,
    text: &str,
    size: usize,
    overlap: usize,
) -> Result<Vec<String>, ChunkError> {
    validate_window(size, overlap)?;

    let tokens = tokenizer.encode(text);
    let total = tokens.len();
    if total == 0 {
        return Ok(Vec::new());
    }

    let step = size - overlap;
    let mut chunks = Vec::new();
    let mut start = 0;
    loop {
        let end = (start + size).min(total);
        chunks.push(tokenizer.decode(&tokens[start..end]));
        if end >= total {
            break;
        }
        start += step;
    }

    debug!(
        total_tokens = total,
        chunk_size = size,
        overlap,
        chunks = chunks.len(),
        "token-window split"
    );
    Ok(chunks)
}
