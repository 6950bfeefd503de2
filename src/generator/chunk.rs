//! The fixed content unit written repeatedly into a fixture file

use super::error::{GeneratorError, Result};

/// One line of the default fixture pattern
pub const DEFAULT_PATTERN: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789\n";

/// Number of pattern repetitions in the default chunk
pub const DEFAULT_REPEAT: usize = 100;

/// Immutable chunk of fixture content, never empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    data: Vec<u8>,
}

impl Chunk {
    /// Build a chunk from `pattern` repeated `times` times
    pub fn repeated(pattern: &str, times: usize) -> Result<Self> {
        Self::from_bytes(pattern.repeat(times).into_bytes())
    }

    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Result<Self> {
        let data = data.into();
        if data.is_empty() {
            return Err(GeneratorError::EmptyChunk);
        }
        Ok(Chunk { data })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl Default for Chunk {
    fn default() -> Self {
        Chunk {
            data: DEFAULT_PATTERN.repeat(DEFAULT_REPEAT).into_bytes(),
        }
    }
}
