//! Write loop that fills a fixture file up to a target size

use std::path::Path;
use tokio::fs::OpenOptions;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, info, trace};

use super::chunk::Chunk;
use super::error::{GeneratorError, Result};
use super::size::{bytes_to_mib, planned_final_size, MIB};

const WRITE_BUFFER_CAPACITY: usize = 256 * 1024;
const PROGRESS_INTERVAL: u64 = 64 * MIB;

/// Fill `path` with `chunk` until at least `target_size` bytes are written.
///
/// The file is truncated first. The position is checked only after each whole
/// chunk, so the result overshoots the target by less than one chunk and is
/// never smaller than it. The parent directory must already exist.
///
/// Returns the number of bytes written, which is the final file size.
pub async fn generate(path: &Path, target_size: u64, chunk: &Chunk) -> Result<u64> {
    if target_size == 0 {
        return Err(GeneratorError::InvalidTargetSize);
    }
    if chunk.is_empty() {
        return Err(GeneratorError::EmptyChunk);
    }
    let chunk_len = chunk.len() as u64;
    if planned_final_size(target_size, chunk_len).is_none() {
        return Err(GeneratorError::SizeOverflow {
            target: target_size,
            chunk_len,
        });
    }

    info!(
        "Generating {} ({} byte target, {} byte chunk)",
        path.display(),
        target_size,
        chunk.len()
    );

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .await
        .map_err(|e| GeneratorError::io(path, e))?;
    let mut writer = BufWriter::with_capacity(WRITE_BUFFER_CAPACITY, file);

    let mut position: u64 = 0;
    let mut next_progress = PROGRESS_INTERVAL;

    while position < target_size {
        writer
            .write_all(chunk.as_bytes())
            .await
            .map_err(|e| GeneratorError::io(path, e))?;
        position += chunk_len;
        trace!("Wrote chunk, position {position}");

        if position >= next_progress {
            debug!(
                "Progress: {:.1} MiB of {:.1} MiB",
                bytes_to_mib(position),
                bytes_to_mib(target_size)
            );
            next_progress += PROGRESS_INTERVAL;
        }
    }

    writer
        .shutdown()
        .await
        .map_err(|e| GeneratorError::io(path, e))?;

    info!(
        "Finished {}: {} bytes ({} over target)",
        path.display(),
        position,
        position - target_size
    );
    Ok(position)
}
