//! Sentence boundary detection and sentence-preserving packing.

use chunkmill_core::ChunkError;
use tracing::debug;

use crate::tokenizer::Tokenizer;
use crate::window;

// ── Boundary detection ──────────────────────────────────────────────

/// Pluggable sentence boundary detector. The packer only depends on this
/// seam, so a stricter locale-aware implementation can be substituted.
pub trait SentenceSplit {
    /// Split `text` into ordered sentence strings. Text with no detectable
    /// boundary comes back as a single sentence; empty input yields nothing.
    fn split(&self, text: &str) -> Vec<String>;
}

/// Default heuristic: a sentence ends at `.`/`!`/`?` followed by whitespace
/// and then an uppercase letter (or end of text). Intentionally under-splits
/// abbreviations ("Dr. smith" stays together).
pub struct PunctuationSplitter;

impl SentenceSplit for PunctuationSplitter {
    fn split(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut sentences = Vec::new();
        let mut start = 0;

        let mut i = 0;
        while i < chars.len() {
            if matches!(chars[i], '.' | '!' | '?') {
                // Look ahead: at least one whitespace char, then uppercase
                // (or nothing left at all).
                let mut j = i + 1;
                while j < chars.len() && chars[j].is_whitespace() {
                    j += 1;
                }
                let has_gap = j > i + 1;
                if has_gap && (j == chars.len() || chars[j].is_uppercase()) {
                    let sentence: String = chars[start..=i].iter().collect();
                    let sentence = sentence.trim();
                    if !sentence.is_empty() {
                        sentences.push(sentence.to_string());
                    }
                    start = j;
                    i = j;
                    continue;
                }
            }
            i += 1;
        }

        // Remainder (also the whole text when no boundary matched).
        let tail: String = chars[start..].iter().collect();
        let tail = tail.trim();
        if !tail.is_empty() {
            sentences.push(tail.to_string());
        }
        sentences
    }
}

// ── Packing ─────────────────────────────────────────────────────────

/// Pack sentences into chunks of at most `max_size` tokens.
///
/// Sentences accumulate in order; when the next sentence would push the
/// running token sum over `max_size`, the accumulator is flushed and a new
/// one starts. A single sentence larger than `max_size` is flushed around and
/// delegated to the token-window splitter — its windows are appended directly
/// and never merged with neighboring sentences.
pub fn pack(
    tokenizer: &Tokenizer,
    splitter: &dyn SentenceSplit,
    text: &str,
    max_size: usize,
    overlap: usize,
) -> Result<Vec<String>, ChunkError> {
    let sentences = splitter.split(text);
    debug!(sentences = sentences.len(), max_size, "packing sentences");

    // An advised size can undercut the configured overlap; the delegated
    // window split still requires overlap < size.
    let overlap = overlap.min(max_size.saturating_sub(1));

    let mut chunks = Vec::new();
    let mut acc = String::new();
    let mut acc_tokens = 0;

    for sentence in sentences {
        let sentence_tokens = tokenizer.count(&sentence);

        if sentence_tokens > max_size {
            if !acc.is_empty() {
                chunks.push(std::mem::take(&mut acc).trim_end().to_string());
                acc_tokens = 0;
            }
            chunks.extend(window::split(tokenizer, &sentence, max_size, overlap)?);
            continue;
        }

        if acc_tokens + sentence_tokens > max_size && !acc.is_empty() {
            chunks.push(std::mem::take(&mut acc).trim_end().to_string());
            acc.push_str(&sentence);
            acc.push(' ');
            acc_tokens = sentence_tokens;
        } else {
            acc.push_str(&sentence);
            acc.push(' ');
            acc_tokens += sentence_tokens;
        }
    }

    let tail = acc.trim_end();
    if !tail.is_empty() {
        chunks.push(tail.to_string());
    }

    Ok(chunks)
}
