use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChunkError {
    #[error("chunk_size must be positive, got {0}")]
    InvalidChunkSize(usize),

    #[error("chunk_overlap ({overlap}) must be smaller than chunk_size ({chunk_size})")]
    InvalidOverlap { overlap: usize, chunk_size: usize },

    #[error("Tokenizer error: {0}")]
    Tokenizer(String),
}
