use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::chunk::{Chunk, DEFAULT_PATTERN, DEFAULT_REPEAT};
use super::error::{GeneratorError, Result};
use super::size::{ByteSize, DEFAULT_TARGET_SIZE};

pub const DEFAULT_OUTPUT_PATH: &str = "./test.txt";

/// Settings for one fixture generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub output: PathBuf,
    pub target_size: ByteSize,
    pub pattern: String,
    pub repeat: usize,
    pub checksum: bool,
    pub dry_run: bool,
}

impl GeneratorConfig {
    /// Length of the chunk this config describes, without building it
    pub fn chunk_len(&self) -> Result<u64> {
        let too_large = || GeneratorError::ChunkTooLarge {
            pattern_len: self.pattern.len(),
            repeat: self.repeat,
        };
        let len = self
            .pattern
            .len()
            .checked_mul(self.repeat)
            .ok_or_else(too_large)?;
        if len == 0 {
            return Err(GeneratorError::EmptyChunk);
        }
        // `str::repeat` panics past isize::MAX
        if len > isize::MAX as usize {
            return Err(too_large());
        }
        Ok(len as u64)
    }

    pub fn chunk(&self) -> Result<Chunk> {
        self.chunk_len()?;
        Chunk::repeated(&self.pattern, self.repeat)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            target_size: DEFAULT_TARGET_SIZE,
            pattern: DEFAULT_PATTERN.to_string(),
            repeat: DEFAULT_REPEAT,
            checksum: false,
            dry_run: false,
        }
    }
}
