//! Shared data model for the segmentation workspace: chunk records,
//! configuration, errors, and aggregate statistics.

pub mod chunk;
pub mod config;
pub mod error;
pub mod stats;

pub use chunk::{Chunk, ChunkStrategy, SplitStrategy};
pub use config::{load_dotenv, validate_window, ChunkConfig, DEFAULT_ENCODING};
pub use error::ChunkError;
pub use stats::ChunkStats;
