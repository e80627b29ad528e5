//! Chunk size recommendation by document length.

/// Map a document's total token count to a recommended chunk size.
///
/// Short documents get smaller chunks for precision, long documents larger
/// chunks for efficiency. Pure step table, deterministic.
pub fn recommend_chunk_size(total_tokens: usize) -> usize {
    if total_tokens <= 2_000 {
        500
    } else if total_tokens <= 10_000 {
        1_000
    } else if total_tokens <= 50_000 {
        1_500
    } else {
        2_000
    }
}

#[cfg(test)]
mod tests {
    use super::recommend_chunk_size;

    #[test]
    fn tier_boundaries() {
        assert_eq!(recommend_chunk_size(0), 500);
        assert_eq!(recommend_chunk_size(2_000), 500);
        assert_eq!(recommend_chunk_size(2_001), 1_000);
        assert_eq!(recommend_chunk_size(10_000), 1_000);
        assert_eq!(recommend_chunk_size(10_001), 1_500);
        assert_eq!(recommend_chunk_size(50_000), 1_500);
        assert_eq!(recommend_chunk_size(50_001), 2_000);
        assert_eq!(recommend_chunk_size(1_000_000), 2_000);
    }
}
