//! Tokenizer adapter over tiktoken BPE encodings.

use chunkmill_core::{ChunkError, DEFAULT_ENCODING};
use tiktoken_rs::CoreBPE;
use tracing::warn;

/// Wraps a subword tokenizer profile: text ↔ token-id conversion plus token
/// counting. Encoding is deterministic; decoding never fails — token ranges
/// cut inside a multi-byte character decode with replacement characters.
pub struct Tokenizer {
    bpe: CoreBPE,
    encoding: String,
}

fn load_encoding(name: &str) -> Option<CoreBPE> {
    let loaded = match name {
        "cl100k_base" => tiktoken_rs::cl100k_base(),
        "o200k_base" => tiktoken_rs::o200k_base(),
        "p50k_base" => tiktoken_rs::p50k_base(),
        "r50k_base" => tiktoken_rs::r50k_base(),
        _ => return None,
    };
    loaded.ok()
}

impl Tokenizer {
    /// Load the named encoding profile. An unknown name (or a profile that
    /// fails to load) degrades to the default profile with a warning rather
    /// than failing the caller.
    pub fn new(encoding: &str) -> Result<Self, ChunkError> {
        if let Some(bpe) = load_encoding(encoding) {
            return Ok(Self {
                bpe,
                encoding: encoding.to_string(),
            });
        }
        warn!(
            encoding,
            fallback = DEFAULT_ENCODING,
            "failed to load tokenizer encoding, falling back"
        );
        let bpe = tiktoken_rs::cl100k_base().map_err(|e| ChunkError::Tokenizer(e.to_string()))?;
        Ok(Self {
            bpe,
            encoding: DEFAULT_ENCODING.to_string(),
        })
    }

    /// The profile actually in use (the fallback after a failed load).
    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    /// Number of tokens in `text`. Zero for empty input.
    pub fn count(&self, text: &str) -> usize {
        if text.is_empty() {
            return 0;
        }
        self.bpe.encode_ordinary(text).len()
    }

    pub fn encode(&self, text: &str) -> Vec<u32> {
        self.bpe.encode_ordinary(text)
    }

    /// Decode a token slice back to text. A window boundary can land inside
    /// a multi-byte character; the broken bytes become U+FFFD instead of an
    /// error, matching lossy decoding in the reference tokenizers.
    pub fn decode(&self, tokens: &[u32]) -> String {
        let bytes: Vec<u8> = self
            .bpe
            ._decode_native_and_split(tokens.to_vec())
            .flatten()
            .collect();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}
