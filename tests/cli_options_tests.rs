use clap::Parser;
use fixture_gen::cli::{FixtureGenCli, OutputFormat};
use fixture_gen::generator::{ByteSize, GeneratorConfig, DEFAULT_PATTERN};
use std::path::PathBuf;

#[test]
fn test_no_arguments_reproduce_default_fixture() {
    let cli = FixtureGenCli::try_parse_from(["fixture-gen"]).unwrap();

    assert_eq!(cli.output, PathBuf::from("./test.txt"));
    assert_eq!(cli.size, ByteSize(1000 * 1024 * 1024));
    assert_eq!(cli.pattern, DEFAULT_PATTERN);
    assert_eq!(cli.repeat, 100);
    assert_eq!(cli.format, OutputFormat::Text);
    assert!(!cli.checksum);
    assert!(!cli.dry_run);

    let config = GeneratorConfig::from(&cli);
    assert_eq!(config, GeneratorConfig::default());
}

#[test]
fn test_overrides_flow_into_config() {
    let cli = FixtureGenCli::try_parse_from([
        "fixture-gen",
        "-o",
        "/tmp/big.txt",
        "--size",
        "64KiB",
        "--pattern",
        "hello ",
        "--repeat",
        "3",
        "--checksum",
        "--dry-run",
        "--format",
        "json",
    ])
    .unwrap();

    let config = GeneratorConfig::from(&cli);
    assert_eq!(config.output, PathBuf::from("/tmp/big.txt"));
    assert_eq!(config.target_size, ByteSize(65_536));
    assert_eq!(config.chunk().unwrap().as_bytes(), b"hello hello hello ");
    assert!(config.checksum);
    assert!(config.dry_run);
    assert_eq!(cli.format, OutputFormat::Json);
}

#[test]
fn test_invalid_size_rejected_by_parser() {
    let result = FixtureGenCli::try_parse_from(["fixture-gen", "--size", "lots"]);
    assert!(result.is_err());

    let result = FixtureGenCli::try_parse_from(["fixture-gen", "--size", "10XiB"]);
    assert!(result.is_err());
}

#[test]
fn test_verbosity_levels() {
    let cli = FixtureGenCli::try_parse_from(["fixture-gen"]).unwrap();
    assert_eq!(cli.log_level(), tracing::Level::INFO);

    let cli = FixtureGenCli::try_parse_from(["fixture-gen", "-v"]).unwrap();
    assert_eq!(cli.log_level(), tracing::Level::DEBUG);

    let cli = FixtureGenCli::try_parse_from(["fixture-gen", "-vvv"]).unwrap();
    assert_eq!(cli.verbosity, 3);
    assert_eq!(cli.log_level(), tracing::Level::TRACE);
}
