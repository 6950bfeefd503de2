use clap::Parser;
use std::path::PathBuf;

use crate::generator::{ByteSize, GeneratorConfig, DEFAULT_OUTPUT_PATH, DEFAULT_PATTERN};

/// Main fixture-gen CLI interface
#[derive(Parser, Debug)]
#[command(name = "fixture-gen")]
#[command(about = "Generate a large repeating-pattern text file for use as test data")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct FixtureGenCli {
    /// Output file (its parent directory must exist)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Minimum size of the generated file, e.g. 4096, 64KiB, 1000MiB, 2G
    #[arg(short, long, default_value = "1000MiB")]
    pub size: ByteSize,

    /// Text repeated to build each chunk
    #[arg(long, default_value = DEFAULT_PATTERN, hide_default_value = true)]
    pub pattern: String,

    /// Pattern repetitions per chunk
    #[arg(long, default_value = "100")]
    pub repeat: usize,

    /// Compute a SHA-256 checksum of the generated file
    #[arg(long)]
    pub checksum: bool,

    /// Show what would be generated without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// Pretty-printed JSON
    Json,
}

impl From<&FixtureGenCli> for GeneratorConfig {
    fn from(cli: &FixtureGenCli) -> Self {
        Self {
            output: cli.output.clone(),
            target_size: cli.size,
            pattern: cli.pattern.clone(),
            repeat: cli.repeat,
            checksum: cli.checksum,
            dry_run: cli.dry_run,
        }
    }
}

impl FixtureGenCli {
    pub fn log_level(&self) -> tracing::Level {
        match self.verbosity {
            0 => tracing::Level::INFO,
            1 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}
