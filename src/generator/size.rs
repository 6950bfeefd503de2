//! Byte sizes for fixture targets

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::GeneratorError;

pub const KIB: u64 = 1024;
pub const MIB: u64 = 1024 * KIB;
pub const GIB: u64 = 1024 * MIB;

/// Default fixture target: 1000 MiB
pub const DEFAULT_TARGET_SIZE: ByteSize = ByteSize(1000 * MIB);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ByteSize(pub u64);

impl ByteSize {
    pub fn as_bytes(self) -> u64 {
        self.0
    }

    pub fn as_mib(self) -> f64 {
        bytes_to_mib(self.0)
    }

    /// Render with the largest binary unit that keeps the value >= 1
    pub fn to_human(self) -> String {
        let bytes = self.0;
        if bytes < KIB {
            return format!("{bytes} B");
        }
        let (value, unit) = if bytes < MIB {
            (bytes as f64 / KIB as f64, "KiB")
        } else if bytes < GIB {
            (bytes as f64 / MIB as f64, "MiB")
        } else {
            (bytes as f64 / GIB as f64, "GiB")
        };
        format!("{value:.1} {unit}")
    }
}

impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_human())
    }
}

impl std::str::FromStr for ByteSize {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| GeneratorError::InvalidSize {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = s.trim();
        let split = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        let (digits, unit) = trimmed.split_at(split);
        if digits.is_empty() {
            return Err(invalid("expected a number of bytes"));
        }

        let value: u64 = digits.parse().map_err(|_| invalid("number is too large"))?;
        let multiplier = match unit.trim().to_ascii_lowercase().as_str() {
            "" | "b" => 1,
            "k" | "kib" => KIB,
            "m" | "mib" => MIB,
            "g" | "gib" => GIB,
            "kb" => 1_000,
            "mb" => 1_000_000,
            "gb" => 1_000_000_000,
            other => return Err(invalid(&format!("unknown unit '{other}'"))),
        };

        value
            .checked_mul(multiplier)
            .map(ByteSize)
            .ok_or_else(|| invalid("size overflows u64"))
    }
}

/// Bytes to mebibytes, without rounding
pub fn bytes_to_mib(bytes: u64) -> f64 {
    bytes as f64 / MIB as f64
}

/// Exact size a generation run produces: the target rounded up to whole chunks.
///
/// `None` for a zero chunk length or when the rounded size does not fit in u64.
pub fn planned_final_size(target: u64, chunk_len: u64) -> Option<u64> {
    if chunk_len == 0 {
        return None;
    }
    target.div_ceil(chunk_len).checked_mul(chunk_len)
}
