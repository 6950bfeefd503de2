//! Fixture file generation
//!
//! Fills a file with a repeating chunk until it reaches a target size and
//! reports what was produced.

pub mod checksum;
pub mod chunk;
pub mod config;
pub mod error;
pub mod report;
pub mod size;
pub mod writer;

pub use checksum::sha256_file;
pub use chunk::{Chunk, DEFAULT_PATTERN, DEFAULT_REPEAT};
pub use config::{GeneratorConfig, DEFAULT_OUTPUT_PATH};
pub use error::*;
pub use report::{report_size, SizeReport};
pub use size::{bytes_to_mib, planned_final_size, ByteSize, DEFAULT_TARGET_SIZE};
pub use writer::generate;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

/// Outcome of a completed generation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureReport {
    pub path: PathBuf,
    pub target_bytes: u64,
    pub chunk_len: u64,
    pub bytes_written: u64,
    pub chunks_written: u64,
    pub size: SizeReport,
    pub checksum: Option<String>,
    pub elapsed_ms: u64,
}

/// What a run would produce, computed without touching the filesystem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixturePlan {
    pub path: PathBuf,
    pub target_bytes: u64,
    pub chunk_len: u64,
    pub planned_chunks: u64,
    pub planned_size: SizeReport,
}

pub fn plan_fixture(config: &GeneratorConfig) -> Result<FixturePlan> {
    let target = config.target_size.as_bytes();
    if target == 0 {
        return Err(GeneratorError::InvalidTargetSize);
    }
    let chunk_len = config.chunk_len()?;
    let planned = planned_final_size(target, chunk_len)
        .ok_or(GeneratorError::SizeOverflow { target, chunk_len })?;

    Ok(FixturePlan {
        path: config.output.clone(),
        target_bytes: target,
        chunk_len,
        planned_chunks: planned / chunk_len,
        planned_size: SizeReport::from_bytes(planned),
    })
}

/// Generate the fixture described by `config`, then stat and optionally hash it
pub async fn generate_fixture(config: &GeneratorConfig) -> Result<FixtureReport> {
    let chunk = config.chunk()?;
    let target = config.target_size.as_bytes();
    let started = Instant::now();

    let bytes_written = generate(&config.output, target, &chunk).await?;
    let size = report_size(&config.output).await?;
    debug!(
        "Stat reports {} bytes for {}",
        size.bytes,
        config.output.display()
    );

    let checksum = if config.checksum {
        let digest = sha256_file(&config.output).await?;
        info!("SHA-256 {digest}");
        Some(digest)
    } else {
        None
    };

    let chunk_len = chunk.len() as u64;
    Ok(FixtureReport {
        path: config.output.clone(),
        target_bytes: target,
        chunk_len,
        bytes_written,
        chunks_written: bytes_written / chunk_len,
        size,
        checksum,
        elapsed_ms: started.elapsed().as_millis() as u64,
    })
}
