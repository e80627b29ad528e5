//! Chunking configuration.

use std::env;

use serde::{Deserialize, Serialize};

use crate::error::ChunkError;

/// Tokenizer profile used when none is requested or loading fails.
pub const DEFAULT_ENCODING: &str = "cl100k_base";

pub const DEFAULT_CHUNK_SIZE: usize = 1000;
pub const DEFAULT_CHUNK_OVERLAP: usize = 200;

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_usize(key: &str, default: usize) -> usize {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

// ── Config ──────────────────────────────────────────────────────────

/// Configuration for the segmentation engine. Immutable once handed to a
/// chunker: auto-optimization computes an effective size per call instead of
/// writing it back here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkConfig {
    /// Maximum tokens per chunk.
    pub chunk_size: usize,
    /// Tokens of overlap between consecutive token-window chunks.
    pub chunk_overlap: usize,
    /// Named tokenizer profile (e.g. `cl100k_base`).
    pub encoding: String,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
            encoding: DEFAULT_ENCODING.to_string(),
        }
    }
}

impl ChunkConfig {
    /// Build config from environment variables (call `load_dotenv()` first).
    pub fn from_env() -> Self {
        Self {
            chunk_size: env_usize("CHUNK_SIZE", DEFAULT_CHUNK_SIZE),
            chunk_overlap: env_usize("CHUNK_OVERLAP", DEFAULT_CHUNK_OVERLAP),
            encoding: env_or("TOKENIZER_ENCODING", DEFAULT_ENCODING),
        }
    }

    /// Reject invalid size/overlap pairs before any processing happens.
    pub fn validate(&self) -> Result<(), ChunkError> {
        validate_window(self.chunk_size, self.chunk_overlap)
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!(
            chunk_size = self.chunk_size,
            chunk_overlap = self.chunk_overlap,
            encoding = %self.encoding,
            "chunk config loaded"
        );
    }
}

/// Shared validation for any (size, overlap) pair, including per-call
/// overrides that bypass the stored config.
pub fn validate_window(chunk_size: usize, chunk_overlap: usize) -> Result<(), ChunkError> {
    if chunk_size == 0 {
        return Err(ChunkError::InvalidChunkSize(chunk_size));
    }
    if chunk_overlap >= chunk_size {
        return Err(ChunkError::InvalidOverlap {
            overlap: chunk_overlap,
            chunk_size,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(ChunkConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_chunk_size_rejected() {
        let config = ChunkConfig {
            chunk_size: 0,
            chunk_overlap: 0,
            encoding: DEFAULT_ENCODING.to_string(),
        };
        assert!(matches!(
            config.validate(),
            Err(ChunkError::InvalidChunkSize(0))
        ));
    }

    #[test]
    fn overlap_must_be_smaller_than_size() {
        assert!(matches!(
            validate_window(100, 100),
            Err(ChunkError::InvalidOverlap { overlap: 100, chunk_size: 100 })
        ));
        assert!(matches!(
            validate_window(100, 150),
            Err(ChunkError::InvalidOverlap { .. })
        ));
        assert!(validate_window(100, 99).is_ok());
    }
}
