//! Chunk builder / orchestrator.

use std::collections::BTreeMap;

use chunkmill_core::{Chunk, ChunkConfig, ChunkError, ChunkStats, SplitStrategy};
use tracing::{info, warn};

use crate::advisor::recommend_chunk_size;
use crate::merge::merge_small;
use crate::sentence::{pack, PunctuationSplitter, SentenceSplit};
use crate::tokenizer::Tokenizer;
use crate::window;

/// Result of one document-chunking call: the chunks plus the chunk size that
/// was actually applied (the advisor's recommendation under auto-optimize,
/// the configured size otherwise).
#[derive(Debug)]
pub struct DocumentChunks {
    pub chunks: Vec<Chunk>,
    pub chunk_size: usize,
}

/// Drives per-page and multi-page chunking: picks the effective chunk size,
/// runs a splitting strategy, attaches identity and provenance metadata, and
/// consolidates undersized chunks.
///
/// Configuration is immutable after construction; independent callers can
/// share one instance freely.
pub struct Chunker {
    tokenizer: Tokenizer,
    config: ChunkConfig,
    splitter: Box<dyn SentenceSplit + Send + Sync>,
}

impl Chunker {
    /// Build a chunker, rejecting invalid configuration up front.
    pub fn new(config: ChunkConfig) -> Result<Self, ChunkError> {
        config.validate()?;
        let tokenizer = Tokenizer::new(&config.encoding)?;
        Ok(Self {
            tokenizer,
            config,
            splitter: Box::new(PunctuationSplitter),
        })
    }

    /// Swap in a different sentence boundary detector.
    pub fn with_splitter(mut self, splitter: Box<dyn SentenceSplit + Send + Sync>) -> Self {
        self.splitter = splitter;
        self
    }

    pub fn config(&self) -> &ChunkConfig {
        &self.config
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn count_tokens(&self, text: &str) -> usize {
        self.tokenizer.count(text)
    }

    // ── Raw splitting ───────────────────────────────────────────────

    /// Split into fixed-size overlapping token windows using the configured
    /// size and overlap.
    pub fn chunk_by_tokens(&self, text: &str) -> Result<Vec<String>, ChunkError> {
        self.chunk_by_tokens_sized(text, self.config.chunk_size, self.config.chunk_overlap)
    }

    /// Token-window split with explicit size/overlap, validated at call time.
    pub fn chunk_by_tokens_sized(
        &self,
        text: &str,
        chunk_size: usize,
        chunk_overlap: usize,
    ) -> Result<Vec<String>, ChunkError> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        window::split(&self.tokenizer, text, chunk_size, chunk_overlap)
    }

    /// Split at sentence boundaries, packing sentences up to the configured
    /// chunk size.
    pub fn chunk_by_sentences(&self, text: &str) -> Result<Vec<String>, ChunkError> {
        self.chunk_by_sentences_sized(text, self.config.chunk_size)
    }

    /// Sentence packing with an explicit maximum chunk size.
    pub fn chunk_by_sentences_sized(
        &self,
        text: &str,
        max_size: usize,
    ) -> Result<Vec<String>, ChunkError> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        pack(
            &self.tokenizer,
            self.splitter.as_ref(),
            text,
            max_size,
            self.config.chunk_overlap,
        )
    }

    // ── Structured chunks ───────────────────────────────────────────

    /// Run `strategy` over `text` and wrap the raw pieces into chunks with
    /// fresh ids, sequential indices from 0, provenance, and derived counts.
    pub fn create_chunks(
        &self,
        text: &str,
        source_file: &str,
        page_number: Option<u32>,
        strategy: SplitStrategy,
    ) -> Result<Vec<Chunk>, ChunkError> {
        self.create_chunks_sized(text, source_file, page_number, strategy, self.config.chunk_size)
    }

    fn create_chunks_sized(
        &self,
        text: &str,
        source_file: &str,
        page_number: Option<u32>,
        strategy: SplitStrategy,
        chunk_size: usize,
    ) -> Result<Vec<Chunk>, ChunkError> {
        if text.trim().is_empty() {
            warn!(source_file, ?page_number, "empty text, nothing to chunk");
            return Ok(Vec::new());
        }

        // The advisor can pick a size below the configured overlap.
        let overlap = self.config.chunk_overlap.min(chunk_size.saturating_sub(1));

        let raw = match strategy {
            SplitStrategy::Sentences => self.chunk_by_sentences_sized(text, chunk_size)?,
            SplitStrategy::Tokens => self.chunk_by_tokens_sized(text, chunk_size, overlap)?,
        };

        let chunks: Vec<Chunk> = raw
            .into_iter()
            .enumerate()
            .map(|(index, piece)| {
                let token_count = self.tokenizer.count(&piece);
                Chunk::new(piece, index, source_file, page_number, strategy.into(), token_count)
            })
            .collect();

        info!(source_file, chunks = chunks.len(), "created structured chunks");
        Ok(chunks)
    }

    // ── Document-level orchestration ────────────────────────────────

    /// Chunk one document (or page) with the sentence strategy.
    ///
    /// Under `auto_optimize` the chunk size is derived from the document's
    /// total token count and undersized chunks are merged afterwards with
    /// `min_size = max(100, size / 10)`. The effective size is returned, not
    /// written back into the configuration.
    pub fn chunk_document(
        &self,
        text: &str,
        source_file: &str,
        page_number: Option<u32>,
        auto_optimize: bool,
    ) -> Result<DocumentChunks, ChunkError> {
        if text.trim().is_empty() {
            return Ok(DocumentChunks {
                chunks: Vec::new(),
                chunk_size: self.config.chunk_size,
            });
        }

        let chunk_size = if auto_optimize {
            let total = self.tokenizer.count(text);
            let size = recommend_chunk_size(total);
            info!(total_tokens = total, chunk_size = size, "auto-optimized chunk size");
            size
        } else {
            self.config.chunk_size
        };

        // Sentence strategy is the document-level default; it keeps chunks
        // semantically coherent where blind token windows would not.
        let mut chunks =
            self.create_chunks_sized(text, source_file, page_number, SplitStrategy::Sentences, chunk_size)?;

        if auto_optimize && !chunks.is_empty() {
            let min_size = (chunk_size / 10).max(100);
            chunks = merge_small(&self.tokenizer, chunks, min_size);
        }

        Ok(DocumentChunks { chunks, chunk_size })
    }

    /// Chunk a page map in page-number order, skipping blank pages. Results
    /// keep page order, then within-page index order.
    pub fn chunk_multiple_pages(
        &self,
        pages: &BTreeMap<u32, String>,
        source_file: &str,
        auto_optimize: bool,
    ) -> Result<Vec<Chunk>, ChunkError> {
        let mut all_chunks = Vec::new();

        for (page_number, text) in pages {
            if text.trim().is_empty() {
                warn!(source_file, page = page_number, "skipping empty page");
                continue;
            }
            let document =
                self.chunk_document(text, source_file, Some(*page_number), auto_optimize)?;
            all_chunks.extend(document.chunks);
        }

        info!(
            source_file,
            pages = pages.len(),
            chunks = all_chunks.len(),
            "chunked pages"
        );
        Ok(all_chunks)
    }

    /// Aggregate statistics for a chunk sequence.
    pub fn statistics(&self, chunks: &[Chunk]) -> ChunkStats {
        ChunkStats::from_chunks(chunks)
    }
}
