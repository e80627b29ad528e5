//! chunkmill — chunk a text document into token-bounded records.
//!
//! Reads UTF-8 text from a file (or stdin) and writes one serialized chunk
//! record per line, with optional aggregate statistics at the end. Extraction
//! from binary formats is out of scope; feed this extracted page text.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use chunkmill_core::{load_dotenv, ChunkConfig, SplitStrategy};
use chunkmill_engine::Chunker;

// ── CLI ─────────────────────────────────────────────────────────────

/// Document segmentation tool — token-bounded chunk records on stdout.
#[derive(Parser, Debug)]
#[command(name = "chunkmill", version, about)]
struct Cli {
    /// Input text file (reads stdin when omitted).
    file: Option<PathBuf>,

    /// Provenance label stored on each chunk (defaults to the file name).
    #[arg(long)]
    source_file: Option<String>,

    /// Maximum tokens per chunk.
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Token overlap between consecutive token-window chunks.
    #[arg(long)]
    chunk_overlap: Option<usize>,

    /// Tokenizer encoding profile.
    #[arg(long)]
    encoding: Option<String>,

    /// Splitting strategy: "sentences" (default) or "tokens".
    #[arg(long, default_value = "sentences")]
    strategy: String,

    /// Derive the chunk size from document length and merge undersized
    /// chunks afterwards (sentence strategy only).
    #[arg(long)]
    auto: bool,

    /// Print aggregate statistics as a final JSON line.
    #[arg(long)]
    stats: bool,
}

impl Cli {
    /// Flag combinations clap's declarative rules cannot express.
    fn validate(&self) -> anyhow::Result<()> {
        if self.auto && self.strategy == "tokens" {
            anyhow::bail!(
                "--auto applies to the sentence strategy only; drop it or use --strategy sentences"
            );
        }
        Ok(())
    }
}

// ── main ────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    load_dotenv();
    let cli = Cli::parse();
    cli.validate()?;

    let mut config = ChunkConfig::from_env();
    if let Some(size) = cli.chunk_size {
        config.chunk_size = size;
    }
    if let Some(overlap) = cli.chunk_overlap {
        config.chunk_overlap = overlap;
    }
    if let Some(encoding) = &cli.encoding {
        config.encoding = encoding.clone();
    }
    config.log_summary();

    let text = match &cli.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let source_file = cli.source_file.clone().unwrap_or_else(|| {
        cli.file
            .as_deref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "stdin".to_string())
    });

    let chunker = Chunker::new(config)?;
    let chunks = match cli.strategy.as_str() {
        "tokens" => chunker.create_chunks(&text, &source_file, None, SplitStrategy::Tokens)?,
        "sentences" => {
            chunker
                .chunk_document(&text, &source_file, None, cli.auto)?
                .chunks
        }
        other => anyhow::bail!("unknown strategy: {other} (expected \"sentences\" or \"tokens\")"),
    };

    for chunk in &chunks {
        println!("{}", serde_json::to_string(chunk)?);
    }

    if cli.stats {
        let stats = chunker.statistics(&chunks);
        println!("{}", serde_json::to_string(&stats)?);
    }

    info!(source_file, chunks = chunks.len(), "done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;

    #[test]
    fn auto_with_token_strategy_is_rejected() {
        let cli = Cli::try_parse_from(["chunkmill", "--strategy", "tokens", "--auto"]).unwrap();
        assert!(cli.validate().is_err());
    }

    #[test]
    fn auto_with_sentence_strategy_is_accepted() {
        let cli = Cli::try_parse_from(["chunkmill", "--auto"]).unwrap();
        assert!(cli.validate().is_ok());
    }
}
