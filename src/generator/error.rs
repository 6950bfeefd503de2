use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Target size must be greater than zero bytes")]
    InvalidTargetSize,

    #[error("Chunk must contain at least one byte")]
    EmptyChunk,

    #[error("Chunk of {repeat} x {pattern_len} bytes is too large")]
    ChunkTooLarge { pattern_len: usize, repeat: usize },

    #[error("Target of {target} bytes cannot be reached in whole {chunk_len} byte chunks")]
    SizeOverflow { target: u64, chunk_len: u64 },

    #[error("Invalid size '{input}': {reason}")]
    InvalidSize { input: String, reason: String },
}

impl GeneratorError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GeneratorError::Io {
            path: path.into(),
            source,
        }
    }

    /// Underlying I/O error kind, if this is an I/O failure
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            GeneratorError::Io { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
