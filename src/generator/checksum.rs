//! SHA-256 digests of generated fixtures

use sha2::{Digest, Sha256};
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncReadExt;

use super::error::{GeneratorError, Result};

/// Lowercase hex SHA-256 of the file at `path`
pub async fn sha256_file(path: &Path) -> Result<String> {
    let mut file = File::open(path)
        .await
        .map_err(|e| GeneratorError::io(path, e))?;
    let mut buffer = vec![0; 8192];
    let mut hasher = Sha256::new();

    loop {
        let bytes_read = file
            .read(&mut buffer)
            .await
            .map_err(|e| GeneratorError::io(path, e))?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_sha256_known_value() {
        let temp_file = NamedTempFile::new().unwrap();
        tokio::fs::write(temp_file.path(), b"hello world").await.unwrap();

        let checksum = sha256_file(temp_file.path()).await.unwrap();
        assert_eq!(
            checksum,
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[tokio::test]
    async fn test_sha256_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = sha256_file(&temp_dir.path().join("absent")).await;
        assert!(matches!(result, Err(GeneratorError::Io { .. })));
    }
}
