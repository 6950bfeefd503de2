//! Final size reporting for generated fixtures

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{GeneratorError, Result};
use super::size::ByteSize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeReport {
    pub bytes: u64,
    pub mib: f64,
}

impl SizeReport {
    pub fn from_bytes(bytes: u64) -> Self {
        SizeReport {
            bytes,
            mib: ByteSize(bytes).as_mib(),
        }
    }
}

/// Stat `path` and report its size in bytes and mebibytes
pub async fn report_size(path: &Path) -> Result<SizeReport> {
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|e| GeneratorError::io(path, e))?;
    Ok(SizeReport::from_bytes(metadata.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_report_size_of_existing_file() {
        let temp_file = NamedTempFile::new().unwrap();
        tokio::fs::write(temp_file.path(), vec![b'a'; 3 * 1024 * 1024 / 2])
            .await
            .unwrap();

        let report = report_size(temp_file.path()).await.unwrap();

        assert_eq!(report.bytes, 1_572_864);
        assert_eq!(report.mib, 1.5);
    }

    #[tokio::test]
    async fn test_report_size_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let err = report_size(&temp_dir.path().join("nope.txt"))
            .await
            .unwrap_err();
        assert_eq!(err.io_kind(), Some(std::io::ErrorKind::NotFound));
    }
}
